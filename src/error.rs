//! Error types for the depth chart service and client

use reqwest::StatusCode;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, DepthChartError>;

#[derive(Error, Debug)]
pub enum DepthChartError {
    #[error("Player {player} is already on the {position} depth chart")]
    DuplicatePlayer { position: String, player: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Depth chart lock poisoned")]
    LockPoisoned,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Depth chart API rejected {operation} with status {status}")]
    Rejected { operation: String, status: u16 },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl DepthChartError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        DepthChartError::InvalidInput {
            message: message.into(),
        }
    }

    /// HTTP status the API boundary reports for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            DepthChartError::DuplicatePlayer { .. } => StatusCode::CONFLICT,
            DepthChartError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
