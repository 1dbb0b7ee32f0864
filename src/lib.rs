//! mediacat - a local media catalog and streaming server
//!
//! The catalog is rebuilt from the assets tree on every request: folders are
//! scanned into [`catalog::MediaDescriptor`]s whose ids only hold for the
//! scan that produced them. Files are streamed with byte-range support by
//! [`media::stream_media`].

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod media;
pub mod server;
pub mod utils;

pub use catalog::{Library, MediaDescriptor, MediaKind, list_catalog};
pub use config::Config;
pub use error::{Error, Result};
pub use media::{pick_random, plan_response, stream_media};
pub use server::{AppContext, create_router};
