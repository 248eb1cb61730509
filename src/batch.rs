//! The per-object batch loop and its outcome accounting.
//!
//! An object is the unit of failure isolation: whatever happens while
//! processing one object is logged against its code and the batch moves on.

use crate::error::RunError;
use std::path::{Path, PathBuf};

/// Disjoint per-object outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    /// An expected precondition was not met (missing report, no appendices,
    /// output already present); nothing was produced, nothing went wrong.
    Skipped,
    Failed,
}

/// Accumulated outcomes of one batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub succeeded: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
}

impl BatchSummary {
    pub fn record(&mut self, code: &str, outcome: Outcome) {
        let bucket = match outcome {
            Outcome::Succeeded => &mut self.succeeded,
            Outcome::Skipped => &mut self.skipped,
            Outcome::Failed => &mut self.failed,
        };
        bucket.push(code.to_string());
    }

    pub fn any_failed(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Writes the end-of-run summary to the log.
    pub fn log(&self, label: &str) {
        log::info!("{label} summary");
        log::info!("  succeeded: {}", self.succeeded.len());
        log::info!("  skipped:   {}", self.skipped.len());
        log::info!("  failed:    {}", self.failed.len());
        if !self.succeeded.is_empty() {
            log::info!("successful objects: {}", self.succeeded.join(", "));
        }
        if !self.skipped.is_empty() {
            log::warn!("skipped objects: {}", self.skipped.join(", "));
        }
        if !self.failed.is_empty() {
            log::error!("failed objects: {}", self.failed.join(", "));
        }
    }
}

/// Runs `process` for every object, containing failures per object.
pub fn run_batch<F>(
    objects: &[(PathBuf, String)],
    label: &str,
    mut process: F,
) -> BatchSummary
where
    F: FnMut(&Path, &str) -> Result<Outcome, RunError>,
{
    let started = chrono::Local::now();
    let mut summary = BatchSummary::default();

    for (path, code) in objects {
        log::info!("processing object [{code}]");
        match process(path, code) {
            Ok(outcome) => summary.record(code, outcome),
            Err(err) => {
                log::error!("object [{code}] failed: {err}");
                summary.record(code, Outcome::Failed);
            }
        }
    }

    summary.log(label);
    log::info!(
        "{label} finished in {}s",
        (chrono::Local::now() - started).num_seconds()
    );
    summary
}
