use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("failed to read document {path:?}: {source}")]
    DocumentRead { path: PathBuf, source: lopdf::Error },

    #[error("{0}")]
    Other(String),
}
