use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum CodepackError {
    #[error("Not a directory: {}", .0.display())]
    InvalidSourceDirectory(PathBuf),
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("Failed to build glob set: {0}")]
    GlobSet(String),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
impl CodepackError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CodepackError::Io {
            path: path.into(),
            source,
        }
    }
}
