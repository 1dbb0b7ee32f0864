//! Configuration constants for mediacat
//!
//! This module contains all hardcoded constants used throughout the server,
//! organized by functionality.

// =============================================================================
// Network Constants
// =============================================================================

/// Default address the HTTP server binds to
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port for the HTTP server
pub const DEFAULT_PORT: u16 = 80;

/// Server header sent with every response
pub const SERVER_NAME: &str = concat!("mediacat/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Asset Layout Constants
// =============================================================================

/// Default root of the media assets tree
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Default directory served as static files
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Letter-partitioned movie library
pub const MOVIES_DIR: &str = "movies";

/// Letter-partitioned music library
pub const MUSIC_DIR: &str = "music";

/// Flat pool of general videos
pub const VIDEOS_DIR: &str = "videos";

/// Flat theme folder, typed by extension
pub const THEME_DIR: &str = "theme";

/// Flat pool of ad/bumper clips
pub const ADS_DIR: &str = "ads";

/// Cover images looked up by name prefix
pub const IMG_DIR: &str = "img";

/// Folder holding the Android installer
pub const APK_DIR: &str = "apk";

/// File name of the Android installer
pub const APK_FILE_NAME: &str = "veotrans.apk";

// =============================================================================
// Catalog Constants
// =============================================================================

/// Filter value selecting every category
pub const ALL_CATEGORIES: &str = "all";

/// Lowest subfolder name (inclusive) considered a category
pub const CATEGORY_RANGE_START: &str = "a";

/// Highest subfolder name (inclusive) considered a category
pub const CATEGORY_RANGE_END: &str = "g";

/// Category labels, one entry per subfolder letter
pub const CATEGORY_LABELS: &[(char, &str)] = &[
    ('a', "Action"),
    ('b', "Premiere"),
    ('c', "Comedy"),
    ('d', "Drama"),
    ('e', "Romance"),
    ('f', "Animation"),
    ('g', "Documentary"),
];

/// Route prefix of cover images
pub const COVER_ROUTE_PREFIX: &str = "/img/";

/// Extensions classified as video by typed scans
pub const TYPED_VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi"];

/// Extensions classified as image by typed scans
pub const TYPED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "png", "gif"];

// =============================================================================
// Content Types
// =============================================================================

/// Content type of video streams and ads
pub const VIDEO_CONTENT_TYPE: &str = "video/mp4";

/// Content type of music streams
pub const MUSIC_CONTENT_TYPE: &str = "audio/mpeg";

/// Content type of the Android installer
pub const APK_CONTENT_TYPE: &str = "application/vnd.android.package-archive";

/// Fallback content type
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

// =============================================================================
// Logging Constants
// =============================================================================

/// Environment variable name for custom log level
pub const LOG_LEVEL_ENV_VAR: &str = "MEDIACAT_LOG";

// =============================================================================
// Response Messages
// =============================================================================

/// Body of every 500 response
pub const INTERNAL_ERROR_MSG: &str = "Internal server error";

/// Body of the ad endpoint when no ad is available
pub const NO_AD_CONTENT_MSG: &str = "No ad content available";

/// Error message for invalid socket address format
pub const INVALID_SOCKET_ADDRESS_MSG: &str = "Invalid socket address format";
