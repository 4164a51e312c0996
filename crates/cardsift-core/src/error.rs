use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid title pattern: {0}")]
    TitlePattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
