//! Command line interface for mediacat

mod args;
mod commands;

pub use args::{Cli, Scan, Serve};
pub use commands::{Commands, ScanCommand, ServeCommand};

use crate::error::Result;
use clap::Parser;

/// Run the CLI application
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    cli.command.run(&cli).await
}
