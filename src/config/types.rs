//! Configuration types for mediacat
//!
//! This module contains the server configuration and the paths derived
//! from it.

use log::LevelFilter;
use std::path::{Path, PathBuf};

use super::constants::*;

/// Configuration for the server
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub host: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Root of the media assets tree
    pub assets_dir: PathBuf,
    /// Directory served as static files
    pub public_dir: PathBuf,
    /// Log level
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bind host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the listening port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the assets root
    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    /// Sets the static files directory
    pub fn with_public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.public_dir = dir.into();
        self
    }

    /// Sets the log level
    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Letter-partitioned movie library
    pub fn movies_dir(&self) -> PathBuf {
        self.asset(MOVIES_DIR)
    }

    /// Letter-partitioned music library
    pub fn music_dir(&self) -> PathBuf {
        self.asset(MUSIC_DIR)
    }

    /// Flat video pool
    pub fn videos_dir(&self) -> PathBuf {
        self.asset(VIDEOS_DIR)
    }

    /// Typed theme folder
    pub fn theme_dir(&self) -> PathBuf {
        self.asset(THEME_DIR)
    }

    /// Ad clips folder
    pub fn ads_dir(&self) -> PathBuf {
        self.asset(ADS_DIR)
    }

    /// Cover images folder
    pub fn img_dir(&self) -> PathBuf {
        self.asset(IMG_DIR)
    }

    /// Path of the Android installer
    pub fn apk_path(&self) -> PathBuf {
        self.asset(APK_DIR).join(APK_FILE_NAME)
    }

    fn asset(&self, name: impl AsRef<Path>) -> PathBuf {
        self.assets_dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_host("127.0.0.1")
            .with_port(8080)
            .with_assets_dir("/srv/media")
            .with_log_level(LevelFilter::Debug);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.movies_dir(), PathBuf::from("/srv/media/movies"));
    }

    #[test]
    fn test_derived_paths() {
        let config = Config::new().with_assets_dir("/a");
        assert_eq!(config.music_dir(), PathBuf::from("/a/music"));
        assert_eq!(config.videos_dir(), PathBuf::from("/a/videos"));
        assert_eq!(config.theme_dir(), PathBuf::from("/a/theme"));
        assert_eq!(config.ads_dir(), PathBuf::from("/a/ads"));
        assert_eq!(config.img_dir(), PathBuf::from("/a/img"));
        assert_eq!(config.apk_path(), PathBuf::from("/a/apk/veotrans.apk"));
    }

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_PORT, 80);
        assert_eq!(LOG_LEVEL_ENV_VAR, "MEDIACAT_LOG");
        assert_eq!(CATEGORY_LABELS.len(), 7);
    }
}
