//! Batch object enumeration.

use crate::error::SourceError;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

// Object-code convention: two digits, a letter, three digits, two digits,
// hyphen separated (e.g. "24H-001-02").
static OBJECT_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}[A-Z]-\d{3}-\d{2}$").expect("valid object code pattern"));

/// Enumerates the objects of a batch: subdirectories of `batch_path` named
/// after the object-code convention, sorted by code so runs are
/// deterministic. Returns `(directory, code)` pairs.
pub fn object_paths_codes(batch_path: &Path) -> Result<Vec<(PathBuf, String)>, SourceError> {
    if !batch_path.is_dir() {
        return Err(SourceError::MissingDirectory(batch_path.to_path_buf()));
    }

    let mut objects: Vec<(PathBuf, String)> = fs::read_dir(batch_path)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().to_string();
            OBJECT_CODE.is_match(&name).then_some((path, name))
        })
        .collect();

    objects.sort_by(|a, b| a.1.cmp(&b.1));
    log::debug!("batch {batch_path:?} holds {} objects", objects.len());
    Ok(objects)
}
