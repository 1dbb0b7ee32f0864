//! Media delivery for mediacat
//!
//! This module provides:
//! - Byte-range streaming of files from disk
//! - Random in-memory selection of ad clips

pub mod random;
pub mod streaming;

pub use random::pick_random;
pub use streaming::{
    ByteWindow, ParsedRange, RangeRequest, ResponsePlan, emit, parse_range, plan_response,
    stream_media,
};
