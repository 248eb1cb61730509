//! Batch run configuration.

use crate::error::RunError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for one work package, loaded from a JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Name of the work package, for logging only.
    pub werkpakket: String,
    /// Root directory holding all batches.
    pub path_batch: PathBuf,
    /// Name of the batch directory to process.
    pub batch: String,
    /// Subdirectory of an object directory where deliverables are written.
    pub save_dir: String,
    /// Directory holding the Bijlage 9 Word templates.
    pub path_templates: PathBuf,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, RunError> {
        log::debug!("loading configuration from {path:?}");
        let data = fs::read_to_string(path).map_err(|err| {
            RunError::Config(format!("cannot read config {path:?}: {err}"))
        })?;
        let config: Config = serde_json::from_str(&data)?;
        Ok(config)
    }

    /// Directory of the batch being processed.
    pub fn batch_path(&self) -> PathBuf {
        self.path_batch.join(&self.batch)
    }

    /// Output directory of one object.
    pub fn output_dir(&self, object_path: &Path) -> PathBuf {
        object_path.join(&self.save_dir)
    }
}
