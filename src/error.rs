use thiserror::Error;

use crate::models::question::Tier;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Question \"{prompt}\" is {found:?}, not {expected:?}")]
    TierMismatch {
        prompt: String,
        expected: Tier,
        found: Tier,
    },
    #[error("No question tagged {0}")]
    UnknownQuestion(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DeckError>;
