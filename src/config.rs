//! Configuration module for mediacat
//!
//! This module provides configuration constants, default values, and the
//! configuration type of the server.

mod constants;
mod types;

pub use constants::*;
pub use types::*;
