//! Utility functions and helpers for mediacat
//!
//! This module provides file name handling and content type detection.

pub mod media;

pub use media::{
    content_type_for_path, display_name, is_typed_image_file, is_typed_video_file,
    lowercase_extension,
};
