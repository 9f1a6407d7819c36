use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("decode error: {0}")]
    Decode(serde_json::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
