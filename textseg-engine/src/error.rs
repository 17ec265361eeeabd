//! Engine error types

use textseg_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core classification error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Configuration document could not be parsed
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// A run could not fit on a line and forced breaking was off
    #[error("excessive line at byte {byte_offset}")]
    ExcessiveLine {
        /// Start of the offending run
        byte_offset: usize,
    },

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    Parallel(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
