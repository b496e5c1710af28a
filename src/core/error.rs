use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocgateError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("Path error: {0}")]
    PathError(String),
    #[error("Tokenizer error: {0}")]
    TokenizerError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Validation failed: {0} failure(s)")]
    ValidationFailed(usize),
}
