//! Core error types (deterministic only)

use alloc::string::String;
use core::fmt;

/// Core errors (no I/O, no external failures)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A value outside the Unicode scalar range, or an unpaired surrogate
    InvalidCodePoint {
        /// Index of the offending unit in the caller's input
        offset: usize,
        /// The rejected value
        value: u32,
    },
    /// The configuration names a Unicode version that is not compiled in
    UnsupportedUnicodeVersion {
        /// The version string that was requested
        requested: String,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidCodePoint { offset, value } => {
                write!(f, "invalid code point U+{value:04X} at offset {offset}")
            }
            CoreError::UnsupportedUnicodeVersion { requested } => write!(
                f,
                "unsupported Unicode version {requested} (tables are built from {})",
                crate::UNICODE_VERSION
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;

/// Check that `value` is a Unicode scalar value.
#[inline]
pub(crate) fn scalar(value: u32, offset: usize) -> Result<char> {
    char::from_u32(value).ok_or(CoreError::InvalidCodePoint { offset, value })
}
