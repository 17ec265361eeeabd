//! Public API for textseg line breaking
//!
//! This crate provides a small, stable surface over the segmentation
//! engine: a [`LineBreaker`] processor, serializable [`Output`], and a
//! handful of convenience functions, including column-width wrapping.
//!
//! ```rust
//! use textseg_api::{linebreaks, runs, wrap};
//!
//! let output = linebreaks("hello world").unwrap();
//! assert_eq!(output.byte_offsets(), [6, 11]);
//! assert_eq!(runs("hello world").unwrap(), ["hello ", "world"]);
//! assert_eq!(wrap("hello world", 5).unwrap(), ["hello \n", "world"]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::sync::Arc;
use std::time::Instant;

use dto::{BreakKind, Metadata, OpportunityDto};
use error::Result;
use textseg_engine::{BreakEvent, Segmenter};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Input, Output};
pub use error::ApiError;
pub use textseg_engine::{LineFormat, UrgentBreak, WrapOptions};
pub use textseg_core::{
    BreakOpportunity, EastAsianWidth, ExceptionSets, LineBreakClass, RuleVariant, WordBreaker,
    UNICODE_VERSION,
};

/// Main entry point for line breaking
///
/// Cheap to clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct LineBreaker {
    inner: Arc<Segmenter>,
    config: Config,
}

impl LineBreaker {
    /// Create a new line breaker with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a new line breaker with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let inner = Segmenter::new(config.inner.clone())?;
        log::debug!(
            "line breaker ready (mode {:?}, edges {})",
            config.inner.execution_mode,
            config.inner.emit_text_edges
        );
        Ok(Self {
            inner: Arc::new(inner),
            config,
        })
    }

    /// Create a line breaker that delegates complex-context runs
    pub fn with_word_breaker(config: Config, breaker: Arc<dyn WordBreaker>) -> Result<Self> {
        let inner = Segmenter::new(config.inner.clone())?.with_word_breaker(breaker);
        Ok(Self {
            inner: Arc::new(inner),
            config,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the underlying engine segmenter
    pub fn segmenter(&self) -> &Segmenter {
        &self.inner
    }

    /// Find break opportunities in the input
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = Instant::now();

        let (events, total_chars, total_bytes) = match input {
            Input::Text(text) => self.process_str(&text)?,
            Input::Bytes(bytes) => self.process_str(&String::from_utf8(bytes)?)?,
            Input::CodePoints(code_points) => {
                let events: Vec<BreakEvent> =
                    self.inner.segment_code_points(&code_points)?.collect();
                let bytes = utf8_len(code_points.iter().filter_map(|&cp| char::from_u32(cp)));
                (events, code_points.len(), bytes)
            }
            Input::Utf16(units) => {
                let events: Vec<BreakEvent> = self.inner.segment_utf16(&units)?.collect();
                let chars: Vec<char> = char::decode_utf16(units.iter().copied())
                    .filter_map(|c| c.ok())
                    .collect();
                (events, chars.len(), utf8_len(chars.into_iter()))
            }
        };

        let opportunities: Vec<OpportunityDto> =
            events.iter().filter_map(OpportunityDto::from_event).collect();
        let allowed_breaks = opportunities
            .iter()
            .filter(|o| o.kind == BreakKind::Allowed)
            .count();

        let metadata = Metadata {
            unicode_version: UNICODE_VERSION.to_string(),
            total_chars,
            total_bytes,
            allowed_breaks,
            mandatory_breaks: opportunities.len() - allowed_breaks,
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        Ok(Output {
            opportunities,
            metadata,
        })
    }

    fn process_str(&self, text: &str) -> Result<(Vec<BreakEvent>, usize, usize)> {
        let events = self.inner.events(text)?;
        Ok((events, text.chars().count(), text.len()))
    }

    /// Process text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }

    /// Split text into unbreakable runs
    pub fn runs<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.inner.runs(text)
    }

    /// Display columns of text
    pub fn columns(&self, text: &str) -> usize {
        self.inner.columns(text)
    }

    /// Wrap text to at most `max_columns` columns per line
    pub fn wrap(&self, text: &str, max_columns: usize) -> Result<Vec<String>> {
        Ok(self.inner.wrap(text, max_columns)?)
    }

    /// Wrap text with explicit options
    pub fn wrap_with(&self, text: &str, options: &WrapOptions) -> Result<Vec<String>> {
        Ok(self.inner.wrap_with(text, options)?)
    }
}

fn utf8_len(chars: impl Iterator<Item = char>) -> usize {
    chars.map(char::len_utf8).sum()
}

// Convenience functions

/// Find break opportunities with default configuration
pub fn linebreaks(text: &str) -> Result<Output> {
    LineBreaker::new()?.process_text(text)
}

/// Split text into unbreakable runs with default configuration
pub fn runs(text: &str) -> Result<Vec<&str>> {
    Ok(LineBreaker::new()?.runs(text))
}

/// Display columns of text; `east_asian` treats ambiguous characters as wide
pub fn columns(text: &str, east_asian: bool) -> Result<usize> {
    let config = if east_asian {
        Config::east_asian()
    } else {
        Config::default()
    };
    Ok(LineBreaker::with_config(config)?.columns(text))
}

/// Wrap text to at most `max_columns` columns with default configuration
pub fn wrap(text: &str, max_columns: usize) -> Result<Vec<String>> {
    LineBreaker::new()?.wrap(text, max_columns)
}

/// Base line break class of a code point
pub fn class_of(code_point: u32) -> Result<LineBreakClass> {
    Ok(textseg_core::class_of(code_point)?)
}

/// Base East Asian Width of a code point
pub fn width_of(code_point: u32) -> Result<EastAsianWidth> {
    Ok(textseg_core::width_of(code_point)?)
}
