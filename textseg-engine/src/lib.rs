//! Line break segmentation over text
//!
//! This crate drives the classification core over whole inputs: it walks
//! code points lazily, carries the pairing state, hands complex-context
//! runs to an optional [`WordBreaker`], offers batch and parallel
//! execution on top, and wraps text to a column width.
//!
//! # Example
//!
//! ```rust
//! use textseg_engine::{BreakOpportunity, EngineConfig, Segmenter};
//!
//! let segmenter = Segmenter::new(EngineConfig::default()).unwrap();
//! let allowed: Vec<usize> = segmenter
//!     .segment_str("hello world")
//!     .filter(|e| e.opportunity == BreakOpportunity::Allowed)
//!     .map(|e| e.index)
//!     .collect();
//! assert_eq!(allowed, [6]);
//! ```

#![warn(missing_docs)]

pub mod assembler;
pub mod chunker;
pub mod config;
pub mod error;
pub mod executor;
pub mod input;
pub mod segmenter;
pub mod wrap;

// Re-export key types
pub use assembler::ResultAssembler;
pub use chunker::LineChunker;
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use segmenter::{BreakEvent, Segmenter, SegmenterBuilder, Segments};
pub use wrap::{LineFormat, UrgentBreak, WrapOptions};

// Re-export from core for convenience
pub use textseg_core::{
    BreakOpportunity, Config, ConfigBuilder, CoreError, EastAsianWidth, ExceptionSets, LineBreakClass,
    QuoteDirection, Resolved, RuleVariant, WordBreaker, UNICODE_VERSION,
};
