//! Media descriptors and the category table
//!
//! A descriptor identifies one media file within a single scan. Ids are
//! positions in that scan and mean nothing outside of it.

use crate::{
    config::{CATEGORY_LABELS, CATEGORY_RANGE_END, CATEGORY_RANGE_START, COVER_ROUTE_PREFIX},
    utils::display_name,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Media kind assigned by typed scans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// `.mp4`, `.mov` or `.avi`
    Video,
    /// `.jpg`, `.png` or `.gif`
    Image,
}

/// One media file as seen by a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaDescriptor {
    /// Zero-based position in the scan that produced this descriptor
    pub id: usize,
    /// File name without extension
    pub name: String,
    /// Label of the enclosing letter subfolder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Route of the cover image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    /// Absolute path on disk, never sent to clients
    #[serde(skip)]
    pub path: PathBuf,
    /// Kind derived from the extension
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MediaKind>,
}

impl MediaDescriptor {
    /// Descriptor of a file found directly under a scanned folder
    pub fn flat(id: usize, path: PathBuf) -> Self {
        Self {
            id,
            name: display_name(&path),
            category: None,
            cover: None,
            path,
            kind: None,
        }
    }

    /// Descriptor of a file found inside a letter subfolder
    pub fn categorized(id: usize, path: PathBuf, folder_name: &str) -> Self {
        let name = display_name(&path);
        Self {
            id,
            cover: Some(format!("{COVER_ROUTE_PREFIX}{name}")),
            name,
            category: Some(category_label(folder_name).to_string()),
            path,
            kind: None,
        }
    }

    /// Descriptor of a file classified by its extension
    pub fn typed(id: usize, path: PathBuf, kind: MediaKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::flat(id, path)
        }
    }

    /// Drops the category label, as music listings do
    pub fn without_category(self) -> Self {
        Self {
            category: None,
            ..self
        }
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cover route, or `""` when there is none
    pub fn cover_url(&self) -> &str {
        self.cover.as_deref().unwrap_or_default()
    }

    /// Category label, or `""` when there is none
    pub fn category_name(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }

    /// True for descriptors typed as images
    pub fn is_image(&self) -> bool {
        self.kind == Some(MediaKind::Image)
    }
}

/// Returns true when a subfolder name falls in the category range
///
/// The comparison is lexical on the lower-cased name, inclusive on both
/// ends.
pub fn is_category_folder(folder_name: &str) -> bool {
    let lower = folder_name.to_lowercase();
    lower.as_str() >= CATEGORY_RANGE_START && lower.as_str() <= CATEGORY_RANGE_END
}

/// Maps a subfolder name to its category label
///
/// Only single-letter names have a label; anything else maps to `""`.
pub fn category_label(folder_name: &str) -> &'static str {
    let mut chars = folder_name.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => {
            let letter = letter.to_ascii_lowercase();
            CATEGORY_LABELS
                .iter()
                .find(|(code, _)| *code == letter)
                .map(|(_, label)| *label)
                .unwrap_or("")
        }
        _ => "",
    }
}

/// Returns true when a category filter selects the given subfolder
pub fn matches_filter(filter: &str, folder_name: &str) -> bool {
    filter.eq_ignore_ascii_case(crate::config::ALL_CATEGORIES)
        || filter.to_lowercase() == folder_name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_letter_has_its_own_label() {
        assert_eq!(category_label("A"), "Action");
        assert_eq!(category_label("B"), "Premiere");
        assert_eq!(category_label("C"), "Comedy");
        assert_eq!(category_label("D"), "Drama");
        assert_eq!(category_label("E"), "Romance");
        assert_eq!(category_label("F"), "Animation");
        assert_eq!(category_label("G"), "Documentary");
    }

    #[test]
    fn test_category_label_is_case_insensitive() {
        assert_eq!(category_label("g"), "Documentary");
        assert_eq!(category_label("c"), "Comedy");
    }

    #[test]
    fn test_unmapped_names_have_empty_label() {
        assert_eq!(category_label("H"), "");
        assert_eq!(category_label("Action"), "");
        assert_eq!(category_label(""), "");
    }

    #[test]
    fn test_is_category_folder() {
        assert!(is_category_folder("A"));
        assert!(is_category_folder("g"));
        assert!(is_category_folder("Drama"));
        assert!(!is_category_folder("H"));
        assert!(!is_category_folder("g1"));
        assert!(!is_category_folder("_tmp"));
        assert!(!is_category_folder(""));
    }

    #[test]
    fn test_matches_filter() {
        assert!(matches_filter("All", "C"));
        assert!(matches_filter("ALL", "C"));
        assert!(matches_filter("c", "C"));
        assert!(matches_filter("C", "c"));
        assert!(!matches_filter("b", "C"));
    }

    #[test]
    fn test_categorized_descriptor() {
        let descriptor = MediaDescriptor::categorized(3, PathBuf::from("/m/D/Heat.mp4"), "D");
        assert_eq!(descriptor.id, 3);
        assert_eq!(descriptor.name, "Heat");
        assert_eq!(descriptor.category.as_deref(), Some("Drama"));
        assert_eq!(descriptor.cover.as_deref(), Some("/img/Heat"));
        assert_eq!(descriptor.kind, None);
    }

    #[test]
    fn test_serialization_hides_path() {
        let descriptor = MediaDescriptor::categorized(0, PathBuf::from("/m/A/Heat.mp4"), "A");
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 0,
                "name": "Heat",
                "category": "Action",
                "cover": "/img/Heat"
            })
        );
    }

    #[test]
    fn test_typed_serialization() {
        let descriptor =
            MediaDescriptor::typed(1, PathBuf::from("/t/bg.png"), MediaKind::Image);
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "bg", "type": "image"}));
    }

    #[test]
    fn test_without_category() {
        let descriptor =
            MediaDescriptor::categorized(0, PathBuf::from("/m/A/Song.mp3"), "A").without_category();
        assert_eq!(descriptor.category, None);
        assert!(descriptor.cover.is_some());
    }
}
