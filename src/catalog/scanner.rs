//! Directory scanning for mediacat
//!
//! Every scan enumerates the filesystem afresh and numbers the files it
//! keeps by position. Read failures never escape a scan: an unreadable root
//! yields no descriptors, an unreadable subfolder or entry is skipped.

use super::descriptor::{MediaDescriptor, MediaKind, is_category_folder, matches_filter};
use crate::config::ALL_CATEGORIES;
use crate::utils::{is_typed_image_file, is_typed_video_file};
use log::{debug, info, warn};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Scans a letter-partitioned folder
///
/// Subfolders whose lower-cased name lies in `"a"..="g"` are enumerated in
/// name order, and their files in name order. Ids are shared across all
/// included subfolders and assigned before the category filter applies.
///
/// # Arguments
/// * `root` - Folder whose children are the letter subfolders
/// * `filter` - `"all"` or a subfolder name, compared case-insensitively
pub async fn scan(root: &Path, filter: &str) -> Vec<MediaDescriptor> {
    let subfolders = match entries_where(root, |metadata| metadata.is_dir()).await {
        Ok(subfolders) => subfolders,
        Err(e) => {
            warn!("Error reading folder {}: {e}", root.display());
            return Vec::new();
        }
    };

    let mut located = Vec::new();
    for subfolder in subfolders {
        let folder_name = entry_name(&subfolder);
        if !is_category_folder(&folder_name) {
            debug!("Skipping non-category folder: {}", subfolder.display());
            continue;
        }
        match regular_files(&subfolder).await {
            Ok(files) => {
                located.extend(files.into_iter().map(|file| (folder_name.clone(), file)));
            }
            Err(e) => warn!("Error reading category folder {}: {e}", subfolder.display()),
        }
    }

    let descriptors: Vec<MediaDescriptor> = located
        .into_iter()
        .enumerate()
        .filter(|(_, (folder_name, _))| matches_filter(filter, folder_name))
        .map(|(id, (folder_name, path))| MediaDescriptor::categorized(id, path, &folder_name))
        .collect();

    info!(
        "Scanned {} ({filter}): {} media files",
        root.display(),
        descriptors.len()
    );
    descriptors
}

/// Scans the files directly under a folder, without categories
pub async fn scan_flat(root: &Path) -> Vec<MediaDescriptor> {
    match regular_files(root).await {
        Ok(files) => files
            .into_iter()
            .enumerate()
            .map(|(id, path)| MediaDescriptor::flat(id, path))
            .collect(),
        Err(e) => {
            warn!("Error reading video folder {}: {e}", root.display());
            Vec::new()
        }
    }
}

/// Scans the files directly under a folder, classified by extension
///
/// Files that are neither video nor image are skipped and take no id.
pub async fn scan_typed(root: &Path) -> Vec<MediaDescriptor> {
    let files = match regular_files(root).await {
        Ok(files) => files,
        Err(e) => {
            warn!("Error reading files from folder {}: {e}", root.display());
            return Vec::new();
        }
    };

    files
        .into_iter()
        .filter_map(|path| match classify(&path) {
            Some(kind) => Some((path, kind)),
            None => {
                debug!("Skipping unsupported file: {}", path.display());
                None
            }
        })
        .enumerate()
        .map(|(id, (path, kind))| MediaDescriptor::typed(id, path, kind))
        .collect()
}

/// Finds a descriptor by id in a full letter-partitioned scan
pub async fn find_by_id(root: &Path, id: usize) -> Option<MediaDescriptor> {
    find_in(scan(root, ALL_CATEGORIES).await, id)
}

/// Finds a descriptor by id in a flat scan
pub async fn find_flat_by_id(root: &Path, id: usize) -> Option<MediaDescriptor> {
    find_in(scan_flat(root).await, id)
}

/// Finds a descriptor by id in a typed scan
pub async fn find_typed_by_id(root: &Path, id: usize) -> Option<MediaDescriptor> {
    find_in(scan_typed(root).await, id)
}

fn find_in(descriptors: Vec<MediaDescriptor>, id: usize) -> Option<MediaDescriptor> {
    descriptors.into_iter().find(|descriptor| descriptor.id == id)
}

fn classify(path: &Path) -> Option<MediaKind> {
    if is_typed_video_file(path) {
        Some(MediaKind::Video)
    } else if is_typed_image_file(path) {
        Some(MediaKind::Image)
    } else {
        None
    }
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Lists the regular files directly under a folder, in name order
pub(crate) async fn regular_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    entries_where(dir, |metadata| metadata.is_file()).await
}

/// Lists the entries of a folder in name order, keeping those whose
/// metadata (symlinks followed) satisfies `keep`
async fn entries_where(
    dir: &Path,
    keep: impl Fn(&std::fs::Metadata) -> bool,
) -> io::Result<Vec<PathBuf>> {
    let mut reader = fs::read_dir(dir).await?;
    let mut paths = Vec::new();
    while let Some(entry) = reader.next_entry().await? {
        paths.push(entry.path());
    }
    paths.sort();

    let mut kept = Vec::with_capacity(paths.len());
    for path in paths {
        match fs::metadata(&path).await {
            Ok(metadata) if keep(&metadata) => kept.push(path),
            Ok(_) => debug!("Skipping entry: {}", path.display()),
            Err(e) => warn!("Error reading metadata of {}: {e}", path.display()),
        }
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, relative.as_bytes()).unwrap();
    }

    fn letter_library() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "A/Heat.mp4");
        write(dir.path(), "A/Ronin.mp4");
        write(dir.path(), "c/Airplane.mp4");
        write(dir.path(), "G/Planet.mp4");
        write(dir.path(), "H/Ignored.mp4");
        write(dir.path(), "zeta/Ignored.mp4");
        write(dir.path(), "loose.mp4");
        dir
    }

    #[tokio::test]
    async fn test_scan_all_assigns_unique_sequential_ids() {
        let dir = letter_library();
        let descriptors = scan(dir.path(), "all").await;

        assert_eq!(descriptors.len(), 4);
        let ids: HashSet<usize> = descriptors.iter().map(|d| d.id).collect();
        assert_eq!(ids, (0..4).collect());
    }

    #[tokio::test]
    async fn test_scan_orders_folders_then_files() {
        let dir = letter_library();
        let names: Vec<(usize, String)> = scan(dir.path(), "ALL")
            .await
            .into_iter()
            .map(|d| (d.id, d.name))
            .collect();

        // "A" < "G" < "c" in byte order
        assert_eq!(
            names,
            vec![
                (0, "Heat".to_string()),
                (1, "Ronin".to_string()),
                (2, "Planet".to_string()),
                (3, "Airplane".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_scan_filter_keeps_ids_and_matches_case_insensitively() {
        let dir = letter_library();
        let comedies = scan(dir.path(), "C").await;

        assert_eq!(comedies.len(), 1);
        assert_eq!(comedies[0].name, "Airplane");
        assert_eq!(comedies[0].id, 3);
        assert_eq!(comedies[0].category.as_deref(), Some("Comedy"));
    }

    #[tokio::test]
    async fn test_scan_filter_excludes_other_folders() {
        let dir = letter_library();
        let action = scan(dir.path(), "a").await;

        assert_eq!(action.len(), 2);
        assert!(action.iter().all(|d| d.path.parent().unwrap().ends_with("A")));
    }

    #[tokio::test]
    async fn test_scan_missing_root_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(scan(&dir.path().join("missing"), "all").await.is_empty());
        assert!(scan_flat(&dir.path().join("missing")).await.is_empty());
        assert!(scan_typed(&dir.path().join("missing")).await.is_empty());
    }

    #[tokio::test]
    async fn test_scan_skips_nested_directories() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "B/New.mp4");
        write(dir.path(), "B/extras/Trailer.mp4");

        let descriptors = scan(dir.path(), "all").await;
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].name, "New");
    }

    #[tokio::test]
    async fn test_scan_flat() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b.mp4");
        write(dir.path(), "a.mov");
        write(dir.path(), "sub/c.mp4");

        let descriptors = scan_flat(dir.path()).await;
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].name, "a");
        assert_eq!(descriptors[0].id, 0);
        assert_eq!(descriptors[1].name, "b");
        assert_eq!(descriptors[1].id, 1);
        assert!(descriptors.iter().all(|d| d.category.is_none()));
    }

    #[tokio::test]
    async fn test_scan_typed_skips_unknown_extensions() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.mp4");
        write(dir.path(), "b.txt");
        write(dir.path(), "c.PNG");
        write(dir.path(), "d.avi");

        let descriptors = scan_typed(dir.path()).await;
        let summary: Vec<(usize, &str, Option<MediaKind>)> = descriptors
            .iter()
            .map(|d| (d.id, d.name.as_str(), d.kind))
            .collect();
        assert_eq!(
            summary,
            vec![
                (0, "a", Some(MediaKind::Video)),
                (1, "c", Some(MediaKind::Image)),
                (2, "d", Some(MediaKind::Video)),
            ]
        );
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let dir = letter_library();
        let found = find_by_id(dir.path(), 2).await.unwrap();
        assert_eq!(found.name, "Planet");
        assert!(find_by_id(dir.path(), 4).await.is_none());
        assert!(find_by_id(dir.path(), usize::MAX).await.is_none());
    }

    #[tokio::test]
    async fn test_find_flat_and_typed_by_id() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.txt");
        write(dir.path(), "b.gif");

        assert_eq!(find_flat_by_id(dir.path(), 1).await.unwrap().name, "b");
        assert_eq!(find_typed_by_id(dir.path(), 0).await.unwrap().name, "b");
        assert!(find_typed_by_id(dir.path(), 1).await.is_none());
    }
}
