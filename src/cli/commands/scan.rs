//! Scan command implementation for mediacat
//!
//! This module implements the scan command which prints the sorted listing
//! of one library, exactly as the JSON endpoints would return it.

use crate::{catalog::list_catalog, config::Config, error::Result};
use log::info;

/// Scan command implementation
pub struct ScanCommand<'a> {
    args: &'a super::super::Scan,
}

impl<'a> ScanCommand<'a> {
    /// Create a new scan command
    pub fn new(args: &'a super::super::Scan) -> Self {
        Self { args }
    }

    /// Execute the scan command
    pub async fn run(&self, config: &Config) -> Result<()> {
        info!(
            "Scanning {:?} under {}",
            self.args.library,
            config.assets_dir.display()
        );
        let listing = list_catalog(self.args.library, config, &self.args.category).await;
        println!("{}", serde_json::to_string_pretty(&listing)?);
        Ok(())
    }
}
