//! Photo reference parsing and file resolution.
//!
//! Photo identifiers come out of the spreadsheet in loose shapes: a list
//! separated by commas or semicolons, with or without extension, with or
//! without the camera-name prefix the actual files carry.

use crate::error::DocError;
use std::fs;
use std::path::{Path, PathBuf};

const PHOTO_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Splits a raw photo-reference cell into identifier tokens.
///
/// Comma wins over semicolon as separator; a trimmed `"nan"` is the
/// upstream missing-value marker and yields no tokens.
pub fn parse_photo_tokens(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw == "nan" {
        return Vec::new();
    }

    let parts: Vec<&str> = if raw.contains(',') {
        raw.split(',').collect()
    } else if raw.contains(';') {
        raw.split(';').collect()
    } else {
        vec![raw]
    };

    parts
        .into_iter()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn normalized_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| {
            stem.to_string_lossy()
                .to_lowercase()
                .split_whitespace()
                .collect()
        })
        .unwrap_or_default()
}

/// Resolves one photo token against the candidate files of an object.
///
/// The token is lowercased and stripped of whitespace; a candidate matches
/// when its extension-stripped base name contains the token, which
/// tolerates identifiers that omit the camera's filename prefix or a
/// size-variant suffix. When both a full-size and a resized variant match,
/// the smallest file wins, as that is the variant meant for embedding.
pub fn resolve_photo_path(token: &str, candidates: &[PathBuf]) -> Result<PathBuf, DocError> {
    let mut needle: String = token.to_lowercase().split_whitespace().collect();
    if let Some(dot) = needle.rfind('.') {
        let extension = needle[dot + 1..].to_string();
        if !PHOTO_EXTENSIONS.contains(&extension.as_str()) {
            return Err(DocError::PhotoExtension {
                token: token.to_string(),
                extension,
            });
        }
        needle.truncate(dot);
    }

    let matches: Vec<&PathBuf> = candidates
        .iter()
        .filter(|path| normalized_stem(path).contains(&needle))
        .collect();

    match matches.as_slice() {
        [] => Err(DocError::PhotoNotFound {
            token: token.to_string(),
            count: candidates.len(),
        }),
        [only] => Ok((*only).clone()),
        several => {
            log::debug!(
                "photo '{token}' matches {} files, taking the smallest",
                several.len()
            );
            several
                .iter()
                .min_by_key(|path| {
                    fs::metadata(path).map(|meta| meta.len()).unwrap_or(u64::MAX)
                })
                .map(|path| (*path).clone())
                .ok_or(DocError::PhotoNotFound {
                    token: token.to_string(),
                    count: candidates.len(),
                })
        }
    }
}
