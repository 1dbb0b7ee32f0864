//! HTTP server for mediacat
//!
//! # Routes
//!
//! Listings (JSON, sorted by name):
//! - `GET /movies/{category}` - Movies of one category letter, or `all`
//! - `GET /music` - All music, without category labels
//! - `GET /videos` - Flat video pool
//! - `GET /themes` - Theme files with their kind
//!
//! Streaming (range requests supported):
//! - `GET /movie/{id}`, `GET /music/{id}`, `GET /video/{id}`, `GET /theme/{id}`
//! - `GET /ads` - A random ad clip
//! - `GET /img/{image_name}` - Cover image by name prefix
//! - `GET /apk` - Android installer
//!
//! Pages: `/`, `/song`, `/movie`, `/about`, `/movie/category/{category}`,
//! `/play/movie/{id}`. Anything else is looked up in the public directory.

mod assets;
mod pages;
mod routes;

use crate::{
    config::{Config, INVALID_SOCKET_ADDRESS_MSG, SERVER_NAME},
    error::{Error, Result},
};
use axum::{Router, routing::get};
use http::{HeaderMap, HeaderValue, header};
use local_ip_address::local_ip;
use log::{debug, info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer};

/// Shared application context
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Server configuration, read-only for the server lifetime
    pub config: Arc<Config>,
}

impl AppContext {
    /// Creates a context around a configuration
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Create the Axum router with all routes
pub fn create_router(ctx: AppContext) -> Router {
    let public_dir = ctx.config.public_dir.clone();

    Router::new()
        // Pages
        .route("/", get(pages::index))
        .route("/song", get(pages::song))
        .route("/movie", get(pages::movie))
        .route("/about", get(pages::about))
        .route("/movie/category/{category}", get(pages::category))
        .route("/play/movie/{id}", get(pages::play))
        // Listings
        .route("/movies/{category}", get(routes::list_movies))
        .route("/music", get(routes::list_music))
        .route("/videos", get(routes::list_videos))
        .route("/themes", get(routes::list_themes))
        // Streaming
        .route("/movie/{id}", get(routes::stream_movie))
        .route("/music/{id}", get(routes::stream_music))
        .route("/video/{id}", get(routes::stream_video))
        .route("/theme/{id}", get(routes::serve_theme))
        .route("/ads", get(routes::random_ad))
        // Assets
        .route("/img/{image_name}", get(assets::serve_image))
        .route("/apk", get(assets::serve_apk))
        .fallback_service(ServeDir::new(public_dir))
        .layer(
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    header::SERVER,
                    HeaderValue::from_static(SERVER_NAME),
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(ctx)
}

/// Extracts the raw `Range` header, if any
fn range_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::RANGE).and_then(|value| value.to_str().ok())
}

/// Parses a scan-local id from a path segment
///
/// Ids that are not numbers cannot name anything, so they are reported as
/// not found.
fn parse_id(raw: &str, what: &str) -> Result<usize> {
    raw.parse()
        .map_err(|_| Error::not_found(what, format!("invalid id '{raw}'")))
}

/// Start the HTTP server and serve until Ctrl-C
pub async fn run(config: Config) -> Result<()> {
    let server_addr_str = format!("{}:{}", config.host, config.port);
    let server_addr: SocketAddr =
        server_addr_str
            .parse()
            .map_err(|e| Error::NetworkAddressParseError {
                address: server_addr_str.clone(),
                reason: format!("{INVALID_SOCKET_ADDRESS_MSG}: {e}"),
            })?;

    let listener = tokio::net::TcpListener::bind(server_addr)
        .await
        .map_err(|source| Error::ServerError {
            source,
            context: format!("Failed to bind {server_addr}"),
        })?;

    info!("Serving assets from {}", config.assets_dir.display());
    info!("Server running on port {}", server_addr.port());
    if server_addr.ip().is_unspecified() {
        log_local_address(server_addr.port());
    }

    let app = create_router(AppContext::new(config));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|source| Error::ServerError {
            source,
            context: "HTTP server stopped unexpectedly".to_string(),
        })
}

/// Logs the LAN address clients can use when bound to all interfaces
fn log_local_address(port: u16) {
    debug!("Identifying local IP address of host");
    match local_ip() {
        Ok(ip) => info!("Reachable at http://{ip}:{port}"),
        Err(e) => warn!("Failed to determine local IP address: {e}"),
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down"),
        Err(e) => warn!("Failed to listen for shutdown signal: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("7", "Movie").unwrap(), 7);
        assert!(matches!(
            parse_id("abc", "Movie"),
            Err(Error::NotFound { .. })
        ));
        assert!(matches!(parse_id("-1", "Movie"), Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_range_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(range_header(&headers), None);
        headers.insert(header::RANGE, HeaderValue::from_static("bytes=0-"));
        assert_eq!(range_header(&headers), Some("bytes=0-"));
    }

    #[test]
    fn test_router_creation() {
        let _router: Router = create_router(AppContext::new(Config::default()));
    }
}
