use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("directory does not exist: {0:?}")]
    MissingDirectory(PathBuf),

    #[error("no ORA export found in {0:?}")]
    NoDataset(PathBuf),

    #[error("no inspection photo directory under {0:?}")]
    NoPhotoDirectory(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
