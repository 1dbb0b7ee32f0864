//! Serve command implementation for mediacat
//!
//! This module implements the serve command which runs the HTTP server
//! until interrupted.

use crate::{config::Config, error::Result, server};
use log::info;

/// Serve command implementation
pub struct ServeCommand<'a> {
    _args: &'a super::super::Serve,
}

impl<'a> ServeCommand<'a> {
    /// Create a new serve command
    pub fn new(args: &'a super::super::Serve) -> Self {
        Self { _args: args }
    }

    /// Execute the serve command
    pub async fn run(&self, config: &Config) -> Result<()> {
        info!("Starting server on {}:{}", config.host, config.port);
        server::run(config.clone()).await
    }
}
