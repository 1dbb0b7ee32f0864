//! Sorted catalog listings
//!
//! Listings are what the JSON endpoints, the pages and the `scan` command
//! show. They are always sorted by name, whatever order the scan produced.

use super::descriptor::MediaDescriptor;
use super::scanner::{scan, scan_flat, scan_typed};
use crate::config::{ALL_CATEGORIES, Config};
use clap::ValueEnum;

/// A media library under the assets root
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Library {
    /// Letter-partitioned movies
    Movies,
    /// Letter-partitioned music, listed without category labels
    Music,
    /// Flat pool of videos
    Videos,
    /// Theme files typed by extension
    Themes,
}

impl Library {
    /// Scans the library and returns it in scan order
    pub async fn scan(&self, config: &Config, category: &str) -> Vec<MediaDescriptor> {
        match self {
            Library::Movies => scan(&config.movies_dir(), category).await,
            Library::Music => scan(&config.music_dir(), ALL_CATEGORIES)
                .await
                .into_iter()
                .map(MediaDescriptor::without_category)
                .collect(),
            Library::Videos => scan_flat(&config.videos_dir()).await,
            Library::Themes => scan_typed(&config.theme_dir()).await,
        }
    }
}

/// Scans a library and sorts the result by name
///
/// `category` only applies to movies; the other libraries ignore it.
pub async fn list_catalog(
    library: Library,
    config: &Config,
    category: &str,
) -> Vec<MediaDescriptor> {
    let mut descriptors = library.scan(config, category).await;
    sort_by_name(&mut descriptors);
    descriptors
}

/// Sorts descriptors by name, case-insensitive, keeping scan order on ties
pub fn sort_by_name(descriptors: &mut [MediaDescriptor]) {
    descriptors.sort_by_cached_key(|descriptor| descriptor.name.to_lowercase());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn descriptor(id: usize, name: &str) -> MediaDescriptor {
        MediaDescriptor::flat(id, PathBuf::from(format!("/v/{name}.mp4")))
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let mut descriptors = vec![
            descriptor(0, "zorro"),
            descriptor(1, "Alien"),
            descriptor(2, "batman"),
        ];
        sort_by_name(&mut descriptors);
        let names: Vec<&str> = descriptors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Alien", "batman", "zorro"]);
    }

    #[test]
    fn test_sort_by_name_is_stable() {
        let mut descriptors = vec![descriptor(0, "Same"), descriptor(1, "same")];
        sort_by_name(&mut descriptors);
        assert_eq!(descriptors[0].id, 0);
        assert_eq!(descriptors[1].id, 1);
    }

    #[tokio::test]
    async fn test_list_catalog_sorts_movies() {
        let dir = TempDir::new().unwrap();
        let movies = dir.path().join("movies");
        std::fs::create_dir_all(movies.join("A")).unwrap();
        std::fs::create_dir_all(movies.join("B")).unwrap();
        std::fs::write(movies.join("A/Zulu.mp4"), b"z").unwrap();
        std::fs::write(movies.join("B/alpha.mp4"), b"a").unwrap();

        let config = Config::new().with_assets_dir(dir.path());
        let listing = list_catalog(Library::Movies, &config, "all").await;

        let names: Vec<(&str, usize)> = listing.iter().map(|d| (d.name.as_str(), d.id)).collect();
        assert_eq!(names, vec![("alpha", 1), ("Zulu", 0)]);
    }

    #[tokio::test]
    async fn test_music_listing_drops_category() {
        let dir = TempDir::new().unwrap();
        let music = dir.path().join("music");
        std::fs::create_dir_all(music.join("E")).unwrap();
        std::fs::write(music.join("E/Ballad.mp3"), b"m").unwrap();

        let config = Config::new().with_assets_dir(dir.path());
        let listing = list_catalog(Library::Music, &config, "ignored").await;

        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].category, None);
        assert_eq!(listing[0].cover.as_deref(), Some("/img/Ballad"));
    }
}
