use crate::domain::error::{LoadError, RecommendError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("io error: {0}")]
    Io(String),
}

impl From<RecommendError> for AppError {
    fn from(err: RecommendError) -> Self {
        match err {
            RecommendError::NotFound { title } => {
                AppError::NotFound(format!("title not found: {}", title))
            }
        }
    }
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Io { .. } => AppError::Io(err.to_string()),
            LoadError::Malformed { .. } | LoadError::Invalid { .. } => {
                AppError::InvalidDataset(err.to_string())
            }
        }
    }
}
