//! Error types for upsig

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpsigError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Non-finite number in payload at '{0}'")]
    NonFiniteNumber(String),

    #[error("Key encoding error: {0}")]
    KeyEncoding(String),
}
