use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HuskError {
    #[error("bundle not found at {}", .0.display())]
    BundleMissing(PathBuf),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HuskResult<T> = Result<T, HuskError>;
