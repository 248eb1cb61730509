//! DocumentConverter trait for out-of-process PDF conversion.
//!
//! The batch driver rasterizes generated Word documents to PDF through an
//! external office application. The converter models a single application
//! instance: one conversion at a time, acquired and released per call.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for document conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("converter exited with {status} for {input:?}")]
    Failed { input: PathBuf, status: std::process::ExitStatus },

    #[error("converter produced no output at {0:?}")]
    MissingOutput(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Converts office documents to PDF.
///
/// Takes `&mut self`: implementations wrap a shared external application
/// and must not run two conversions concurrently against it.
pub trait DocumentConverter {
    /// Converts `input` to a PDF at exactly `output`.
    ///
    /// The conversion is synchronous; the external application is released
    /// before this returns, also on error.
    fn convert_to_pdf(&mut self, input: &Path, output: &Path) -> Result<(), ConvertError>;
}
