//! Media file utilities for mediacat
//!
//! This module provides functions for working with media file names,
//! including extension classification and content type detection.

use crate::config::{DEFAULT_CONTENT_TYPE, TYPED_IMAGE_EXTENSIONS, TYPED_VIDEO_EXTENSIONS};
use std::path::Path;

/// Returns the file name without its extension
///
/// # Arguments
/// * `path` - Path to the file
///
/// # Returns
/// Returns the stem as a lossy UTF-8 string, or an empty string for paths
/// without a file name
pub fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Returns the lower-cased extension of a path, without the dot
pub fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Validates if a file path has an extension classified as video
///
/// # Arguments
/// * `path` - Path to check
///
/// # Returns
/// Returns true for `.mp4`, `.mov` and `.avi`, in any case
pub fn is_typed_video_file(path: &Path) -> bool {
    lowercase_extension(path)
        .is_some_and(|ext| TYPED_VIDEO_EXTENSIONS.contains(&ext.as_str()))
}

/// Validates if a file path has an extension classified as image
///
/// # Arguments
/// * `path` - Path to check
///
/// # Returns
/// Returns true for `.jpg`, `.png` and `.gif`, in any case
pub fn is_typed_image_file(path: &Path) -> bool {
    lowercase_extension(path)
        .is_some_and(|ext| TYPED_IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Gets the MIME type from a file path extension
pub fn content_type_for_path(path: &Path) -> &'static str {
    match lowercase_extension(path).as_deref() {
        Some("mp4") | Some("m4v") => "video/mp4",
        Some("avi") => "video/x-msvideo",
        Some("mkv") => "video/x-matroska",
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("flac") => "audio/flac",
        Some("ogg") => "audio/ogg",
        Some("m4a") => "audio/mp4",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => DEFAULT_CONTENT_TYPE,
    }
}
