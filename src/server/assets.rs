//! Cover images and the Android installer

use super::{AppContext, range_header};
use crate::{
    catalog::scanner::regular_files,
    config::APK_CONTENT_TYPE,
    error::{Error, Result},
    media::stream_media,
    utils::content_type_for_path,
};
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
};
use log::warn;
use tokio::fs;

/// Serves the first image whose file name starts with the requested name
///
/// Matching ignores case and only looks at the last path component of the
/// request, so `../x` looks for `x`.
pub async fn serve_image(
    State(ctx): State<AppContext>,
    Path(image_name): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    let prefix = std::path::Path::new(&image_name)
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .ok_or_else(|| Error::not_found("Image", format!("invalid name '{image_name}'")))?;

    let img_dir = ctx.config.img_dir();
    let images = regular_files(&img_dir)
        .await
        .map_err(|e| Error::storage(&img_dir, e))?;

    let image = images
        .into_iter()
        .find(|image| {
            image
                .file_name()
                .is_some_and(|name| name.to_string_lossy().to_lowercase().starts_with(&prefix))
        })
        .ok_or_else(|| Error::not_found("Image", format!("no image matching '{prefix}'")))?;

    stream_media(&image, range_header(&headers), content_type_for_path(&image)).await
}

pub async fn serve_apk(State(ctx): State<AppContext>, headers: HeaderMap) -> Result<Response> {
    let apk_path = ctx.config.apk_path();
    if !fs::try_exists(&apk_path).await.unwrap_or(false) {
        warn!("APK file does not exist: {}", apk_path.display());
        return Err(Error::not_found("APK", apk_path.display().to_string()));
    }
    stream_media(&apk_path, range_header(&headers), APK_CONTENT_TYPE).await
}
