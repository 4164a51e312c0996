use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
