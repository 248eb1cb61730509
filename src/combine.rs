//! Per-object pipeline: merge the PI report with its appendix PDFs.

use crate::batch::Outcome;
use crate::config::Config;
use crate::error::RunError;
use lopdf::Document;
use rapstel_compose::{ComposeError, build_merge_plan, execute_merge_plan, find_last_page_with_text};
use rapstel_source::most_recent_match;
use std::fs;
use std::path::Path;

/// Appendices in declared priority order: (display label, anchor text).
/// The anchor is searched case-insensitively in the PI report.
const APPENDICES: [(&str, &str); 2] = [
    ("Bijlage 3", "bijlage 3"),
    ("Bijlage 9", "bijlage 9"),
];

/// Suffix appended to the PI report's stem for the merged output.
const MERGED_SUFFIX: &str = " - compleet";

fn load_document(path: &Path) -> Result<Document, ComposeError> {
    Document::load(path).map_err(|source| ComposeError::DocumentRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Combines one object's PI report with the appendices found next to it.
///
/// Skips (rather than fails) when the output directory, the report, or all
/// appendices are missing, and when the merged file already exists; those
/// are expected states on a re-run. The merged PDF reaches its final path
/// only after the whole merge succeeded.
pub fn process_object(
    object_path: &Path,
    object_code: &str,
    config: &Config,
) -> Result<Outcome, RunError> {
    let output_dir = config.output_dir(object_path);
    if !output_dir.is_dir() {
        log::warn!("output directory missing for [{object_code}]: {output_dir:?}");
        return Ok(Outcome::Skipped);
    }

    let Some(report_path) = most_recent_match(&output_dir, "pi rapport", Some("compleet"), "pdf")
    else {
        log::warn!("no PI report found for [{object_code}], skipping");
        return Ok(Outcome::Skipped);
    };

    let appendix_paths: Vec<_> = APPENDICES
        .iter()
        .map(|(_, anchor)| most_recent_match(&output_dir, anchor, None, "pdf"))
        .collect();
    if appendix_paths.iter().all(Option::is_none) {
        log::warn!("no appendices found for [{object_code}], skipping");
        return Ok(Outcome::Skipped);
    }

    let stem = report_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| object_code.to_string());
    let output_path = output_dir.join(format!("{stem}{MERGED_SUFFIX}.pdf"));
    if output_path.exists() {
        log::info!("merged PDF already exists for [{object_code}], skipping");
        return Ok(Outcome::Skipped);
    }

    let primary = load_document(&report_path)?;

    let mut documents = Vec::new();
    let mut anchors = Vec::new();
    for ((label, anchor), path) in APPENDICES.iter().zip(&appendix_paths) {
        let Some(path) = path else {
            log::info!("{label} not present for [{object_code}]");
            continue;
        };
        documents.push(load_document(path)?);
        let page = find_last_page_with_text(&primary, anchor);
        match page {
            Some(page) => log::info!("{label} will be inserted after page {}", page + 1),
            None => log::warn!("'{label}' not referenced in the PI report, appending at end"),
        }
        anchors.push(page);
    }

    let plan = build_merge_plan(&anchors);
    let mut merged = execute_merge_plan(&primary, &documents, &plan)?;

    // Stage next to the final path, publish only on success.
    let staged = output_path.with_extension("pdf.partial");
    merged
        .save(&staged)
        .map_err(|err| ComposeError::from(lopdf::Error::from(err)))?;
    fs::rename(&staged, &output_path)?;

    log::info!("created merged PDF for [{object_code}]: {output_path:?}");
    Ok(Outcome::Succeeded)
}
