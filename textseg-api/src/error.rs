//! API error types

use std::string::FromUtf8Error;
use textseg_engine::EngineError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Engine error
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<textseg_core::CoreError> for ApiError {
    fn from(err: textseg_core::CoreError) -> Self {
        ApiError::Engine(EngineError::Core(err))
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
