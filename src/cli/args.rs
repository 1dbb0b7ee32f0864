//! CLI argument parsing for mediacat
//!
//! This module contains the CLI argument definitions and parsing logic
//! using the clap crate.

use crate::catalog::Library;
use crate::config::{ALL_CATEGORIES, Config, DEFAULT_ASSETS_DIR, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PUBLIC_DIR};
use clap::{Args, Parser};
use log::LevelFilter;
use std::path::PathBuf;

/// A local media catalog and streaming server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level
    #[arg(long, value_name = "LEVEL", global = true, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// Root of the media assets tree
    #[arg(short, long, value_name = "DIR", global = true, default_value = DEFAULT_ASSETS_DIR)]
    pub assets: PathBuf,

    /// The command to execute
    #[command(subcommand)]
    pub command: super::Commands,
}

impl Cli {
    /// Build a Config from CLI arguments and the Serve command
    pub fn build_config(&self, serve_cmd: Option<&Serve>) -> Config {
        let mut config = Config::new()
            .with_assets_dir(&self.assets)
            .with_log_level(self.log_level);

        if let Some(serve) = serve_cmd {
            config = config
                .with_host(&serve.host)
                .with_port(serve.port)
                .with_public_dir(&serve.public);
        }

        config
    }
}

/// Serve command arguments
#[derive(Args)]
pub struct Serve {
    /// The address to bind the HTTP server to
    #[arg(short = 'H', long = "host", default_value = DEFAULT_HOST)]
    pub host: String,

    /// The port to listen on
    #[arg(short = 'P', long = "port", env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory of static files served for unmatched paths
    #[arg(long, value_name = "DIR", default_value = DEFAULT_PUBLIC_DIR)]
    pub public: PathBuf,
}

/// Scan command arguments
#[derive(Args)]
pub struct Scan {
    /// The library to list
    #[arg(value_enum)]
    pub library: Library,

    /// Category letter, or "all" (movies only)
    #[arg(short, long, default_value = ALL_CATEGORIES)]
    pub category: String,
}
