use rapstel_traits::TableError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocError {
    #[error("finding text '{0}' has no colon separator")]
    MalformedFinding(String),

    #[error("photo reference '{token}' carries unsupported extension '{extension}' (allowed: png, jpg, jpeg)")]
    PhotoExtension { token: String, extension: String },

    #[error("no photo matches '{token}' among {count} candidate files")]
    PhotoNotFound { token: String, count: usize },

    #[error("dataset has no '{family}' column")]
    SchemaColumn { family: &'static str },

    #[error("cannot size a document to zero table slots; use the no-data template instead")]
    EmptyTarget,

    #[error("failed to load Word template {path:?}: {message}")]
    Template { path: PathBuf, message: String },

    #[error("table error: {0}")]
    Table(#[from] TableError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
