//! Most-recent-file lookups and photo discovery.

use crate::error::SourceError;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

const PHOTO_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

fn modified(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

/// Finds the most recently modified file in `dir` whose name contains
/// `pattern` (case-insensitive) and carries `extension`.
///
/// `exclude` drops files whose name contains that substring; used to keep
/// an earlier merge output ("... - compleet.pdf") from being picked up as
/// the primary report. A missing directory or no match yields `None`.
pub fn most_recent_match(
    dir: &Path,
    pattern: &str,
    exclude: Option<&str>,
    extension: &str,
) -> Option<PathBuf> {
    log::debug!("searching for '{pattern}' files in {dir:?}");
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => {
            log::warn!("directory does not exist: {dir:?}");
            return None;
        }
    };

    let pattern = pattern.to_lowercase();
    let suffix = format!(".{}", extension.to_lowercase());

    let newest = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            name.contains(&pattern)
                && name.ends_with(&suffix)
                && !exclude.is_some_and(|ex| name.contains(&ex.to_lowercase()))
        })
        .max_by_key(|path| modified(path));

    match &newest {
        Some(path) => log::debug!("most recent '{pattern}' file: {path:?}"),
        None => log::debug!("no files matching '{pattern}' in {dir:?}"),
    }
    newest
}

/// Finds the most recently modified `ORA*` export with one of the given
/// extensions.
pub fn most_recent_ora(dir: &Path, extensions: &[&str]) -> Result<PathBuf, SourceError> {
    let entries = fs::read_dir(dir).map_err(|_| SourceError::MissingDirectory(dir.to_path_buf()))?;

    entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let extension = path
                .extension()
                .map(|e| e.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            name.starts_with("ORA") && extensions.contains(&extension.as_str())
        })
        .max_by_key(|path| modified(path))
        .ok_or_else(|| SourceError::NoDataset(dir.to_path_buf()))
}

fn normalize_dir_name(name: &str) -> String {
    name.to_lowercase().replace(['\'', '-'], "")
}

/// Finds the resized-inspection-photos directory of an object: a
/// subdirectory whose normalized name starts with "inspectiefotos" and ends
/// with "verkleind" (apostrophes and hyphens ignored).
pub fn photo_directory(object_path: &Path) -> Result<PathBuf, SourceError> {
    if !object_path.is_dir() {
        return Err(SourceError::MissingDirectory(object_path.to_path_buf()));
    }

    fs::read_dir(object_path)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .find(|path| {
            let name = path
                .file_name()
                .map(|n| normalize_dir_name(&n.to_string_lossy()))
                .unwrap_or_default();
            name.starts_with("inspectiefotos") && name.ends_with("verkleind")
        })
        .ok_or_else(|| SourceError::NoPhotoDirectory(object_path.to_path_buf()))
}

/// Recursively collects all image files under `dir`, sorted by path.
pub fn collect_photos(dir: &Path) -> Vec<PathBuf> {
    let mut photos: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .map(|e| e.to_string_lossy().to_lowercase())
                .is_some_and(|ext| PHOTO_EXTENSIONS.contains(&ext.as_str()))
        })
        .collect();
    photos.sort();
    log::debug!("collected {} photo candidates under {dir:?}", photos.len());
    photos
}
