use crate::config::INTERNAL_ERROR_MSG;
use axum::response::{IntoResponse, Response};
use http::{StatusCode, header};
use log::{debug, error};
use std::fmt;

/// Errors that can happen inside mediacat
#[derive(Debug)]
pub enum Error {
    // Catalog errors
    /// The requested id, category or file does not resolve to anything
    NotFound {
        /// What was looked up, e.g. "Movie" or "Image"
        what: String,
        /// Additional context about the lookup
        context: String,
    },

    // Storage errors
    /// A file or directory could not be read
    StorageUnavailable {
        /// Path that failed
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    // Range errors
    /// The requested byte range lies outside the file
    RangeNotSatisfiable {
        /// The raw range header value
        range: String,
        /// Size of the file in bytes
        size: u64,
    },

    // Response errors
    /// Template rendering encountered an error
    TemplateRenderError {
        /// The name of the template that failed to render
        template_name: String,
        /// The underlying template error
        source: askama::Error,
    },
    /// Failed to serialize a listing
    SerializationError {
        /// The underlying JSON error
        source: serde_json::Error,
    },
    /// Failed to assemble an HTTP response
    ResponseBuildError {
        /// The underlying HTTP error
        source: http::Error,
    },

    // Server errors
    /// Failed to parse host or IP address
    NetworkAddressParseError {
        /// The address that failed to parse
        address: String,
        /// The reason for the parsing failure
        reason: String,
    },
    /// The HTTP server failed to bind or serve
    ServerError {
        /// The underlying I/O error
        source: std::io::Error,
        /// Additional context about the failure
        context: String,
    },
}

impl Error {
    /// Creates a not found error for the given kind of item
    pub fn not_found(what: impl Into<String>, context: impl Into<String>) -> Self {
        Error::NotFound {
            what: what.into(),
            context: context.into(),
        }
    }

    /// Creates a storage error for the given path
    pub fn storage(path: &std::path::Path, source: std::io::Error) -> Self {
        Error::StorageUnavailable {
            path: path.display().to_string(),
            source,
        }
    }

    /// HTTP status this error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::RangeNotSatisfiable { .. } => StatusCode::RANGE_NOT_SATISFIABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound { what, context } => {
                write!(f, "{what} not found: {context}")
            }
            Error::StorageUnavailable { path, source } => {
                write!(f, "Storage unavailable at '{path}': {source}")
            }
            Error::RangeNotSatisfiable { range, size } => {
                write!(f, "Range '{range}' not satisfiable for {size} bytes")
            }
            Error::TemplateRenderError {
                template_name,
                source,
            } => {
                write!(f, "Failed to render template '{template_name}': {source}")
            }
            Error::SerializationError { source } => {
                write!(f, "Failed to serialize listing: {source}")
            }
            Error::ResponseBuildError { source } => {
                write!(f, "Failed to build response: {source}")
            }
            Error::NetworkAddressParseError { address, reason } => {
                write!(f, "Failed to parse network address '{address}': {reason}")
            }
            Error::ServerError { source, context } => {
                write!(f, "Server error: {source} ({context})")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::StorageUnavailable { source, .. } => Some(source),
            Error::TemplateRenderError { source, .. } => Some(source),
            Error::SerializationError { source } => Some(source),
            Error::ResponseBuildError { source } => Some(source),
            Error::ServerError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<http::Error> for Error {
    fn from(source: http::Error) -> Self {
        Error::ResponseBuildError { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::SerializationError { source }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Error::NotFound { what, .. } => {
                debug!("{self}");
                (status, format!("{what} Not Found")).into_response()
            }
            Error::RangeNotSatisfiable { size, .. } => {
                debug!("{self}");
                (status, [(header::CONTENT_RANGE, format!("bytes */{size}"))]).into_response()
            }
            _ => {
                error!("{self}");
                (status, INTERNAL_ERROR_MSG).into_response()
            }
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn test_not_found_error() {
        let error = Error::not_found("Movie", "id 42");
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert!(error.to_string().contains("Movie not found"));
        assert!(error.to_string().contains("id 42"));
    }

    #[test]
    fn test_storage_error_source() {
        let error = Error::storage(
            std::path::Path::new("/missing.mp4"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.to_string().contains("/missing.mp4"));
        assert!(StdError::source(&error).is_some());
    }

    #[test]
    fn test_range_not_satisfiable_response() {
        let error = Error::RangeNotSatisfiable {
            range: "bytes=2000-".to_string(),
            size: 1000,
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::RANGE_NOT_SATISFIABLE);
        assert_eq!(
            response.headers().get(header::CONTENT_RANGE).unwrap(),
            "bytes */1000"
        );
    }

    #[test]
    fn test_network_address_parse_error() {
        let error = Error::NetworkAddressParseError {
            address: "invalid:address".to_string(),
            reason: "Invalid format".to_string(),
        };
        assert!(
            error
                .to_string()
                .contains("Failed to parse network address")
        );
        assert!(StdError::source(&error).is_none());
    }
}
