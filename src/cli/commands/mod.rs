//! CLI command implementations for mediacat
//!
//! This module contains the implementation of the serve and scan commands.

mod scan;
mod serve;

pub use scan::ScanCommand;
pub use serve::ServeCommand;

use crate::{config::Config, error::Result};
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP catalog and streaming server
    Serve(super::Serve),

    /// Print a library listing as JSON
    Scan(super::Scan),
}

impl Commands {
    /// Execute the command
    pub async fn run(&self, cli: &super::Cli) -> Result<()> {
        let config = match self {
            Self::Serve(serve) => cli.build_config(Some(serve)),
            Self::Scan(_) => cli.build_config(None),
        };
        self.setup_log(&config);
        match self {
            Self::Serve(serve) => ServeCommand::new(serve).run(&config).await?,
            Self::Scan(scan) => ScanCommand::new(scan).run(&config).await?,
        }
        Ok(())
    }

    /// Setup logging configuration
    ///
    /// The log environment variable wins over the `--log-level` flag.
    fn setup_log(&self, config: &Config) {
        use crate::config::LOG_LEVEL_ENV_VAR;
        use log::LevelFilter;
        use simple_logger::SimpleLogger;
        use std::env;

        let log_level = match env::var(LOG_LEVEL_ENV_VAR) {
            Ok(mediacat_log) => match mediacat_log.as_str() {
                "trace" => LevelFilter::Trace,
                "debug" => LevelFilter::Debug,
                "info" => LevelFilter::Info,
                "warn" => LevelFilter::Warn,
                "error" => LevelFilter::Error,
                _ => config.log_level,
            },
            Err(_) => config.log_level,
        };

        SimpleLogger::new()
            .with_level(log_level)
            .init()
            .unwrap_or_else(|_| eprintln!("Warning: Logger already initialized"));
    }
}
