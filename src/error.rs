use thiserror::Error;

/// The error type for everything a per-object pipeline can run into.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PDF composition failed: {0}")]
    Compose(#[from] rapstel_compose::ComposeError),

    #[error("document generation failed: {0}")]
    Doc(#[from] rapstel_doc::DocError),

    #[error("file discovery failed: {0}")]
    Source(#[from] rapstel_source::SourceError),

    #[error("PDF conversion failed: {0}")]
    Convert(#[from] rapstel_traits::ConvertError),
}
