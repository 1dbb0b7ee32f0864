//! Media catalog for mediacat
//!
//! This module builds in-memory listings from the assets tree:
//! - Letter-partitioned scans with category labels
//! - Flat and extension-typed scans
//! - Lookup by scan-local id and sorted listings

pub mod descriptor;
pub mod listing;
pub mod scanner;

pub use descriptor::{MediaDescriptor, MediaKind, category_label};
pub use listing::{Library, list_catalog, sort_by_name};
pub use scanner::{find_by_id, find_flat_by_id, find_typed_by_id, scan, scan_flat, scan_typed};
