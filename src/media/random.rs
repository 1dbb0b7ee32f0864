//! Random clip selection for ad insertion
//!
//! The chosen file is read into memory in one go. This only suits short
//! bumper clips; everything else goes through [`super::streaming`].

use crate::catalog::scanner::regular_files;
use log::{debug, error, warn};
use rand::Rng;
use std::path::Path;
use tokio::fs;

/// Picks a file directly under `folder` uniformly at random and reads it
///
/// # Returns
/// Returns the file content, or `None` when the folder is missing, empty or
/// the chosen file cannot be read
pub async fn pick_random(folder: &Path) -> Option<Vec<u8>> {
    let files = match regular_files(folder).await {
        Ok(files) => files,
        Err(e) => {
            error!("Error getting random ad from {}: {e}", folder.display());
            return None;
        }
    };
    if files.is_empty() {
        warn!("No ad files found in {}", folder.display());
        return None;
    }

    let index = rand::rng().random_range(0..files.len());
    let chosen = &files[index];
    debug!("Picked {} of {} ads: {}", index + 1, files.len(), chosen.display());

    match fs::read(chosen).await {
        Ok(content) => Some(content),
        Err(e) => {
            error!("Error reading ad {}: {e}", chosen.display());
            None
        }
    }
}
