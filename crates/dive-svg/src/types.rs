use dive_pattern::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvgError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid parameter file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid parameter: {0}")]
    Validation(#[from] ValidationError),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, SvgError>;
