use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LineupError>;

#[derive(Debug, Error)]
pub enum LineupError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid CSV Header: {0}")]
    CsvHeader(String),

    #[error("Invalid player at row {row}: {message}")]
    InvalidPlayer { row: usize, message: String },

    #[error("Unknown position at row {row}: {label}")]
    UnknownPosition { row: usize, label: String },

    #[error("Duplicate player id: {0}")]
    DuplicatePlayerId(u32),

    #[error("Invalid generation settings: {0}")]
    InvalidSettings(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {path}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for LineupError {
    fn from(err: toml::de::Error) -> Self {
        LineupError::Config(format!("TOML parse error: {}", err))
    }
}
