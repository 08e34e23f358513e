use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GamerWordsError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Malformed row {row} in {path:?}: {reason}")]
    Parse {
        path: PathBuf,
        row: usize,
        reason: String,
    },
}

pub type GwResult<T> = Result<T, GamerWordsError>;
