//! Data Transfer Objects for API

use textseg_core::BreakOpportunity;
use textseg_engine::BreakEvent;

#[cfg(feature = "serde")]
use crate::error::Result;

/// Input for processing
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Text string
    Text(String),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Unicode scalar values; checked before processing
    CodePoints(Vec<u32>),
    /// UTF-16 code units; checked before processing
    Utf16(Vec<u16>),
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from code points
    pub fn from_code_points(code_points: Vec<u32>) -> Self {
        Input::CodePoints(code_points)
    }

    /// Create input from UTF-16 code units
    pub fn from_utf16(units: Vec<u16>) -> Self {
        Input::Utf16(units)
    }
}

/// Kind of a reported break
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BreakKind {
    /// A line must end here
    Mandatory,
    /// A line may end here
    Allowed,
}

/// A break opportunity (serializable DTO)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpportunityDto {
    /// Code point offset; the break is before this code point
    pub index: usize,
    /// Code point the break follows; `None` only for empty input
    pub after: Option<usize>,
    /// Offset in the UTF-8 encoding of the input
    pub byte_offset: usize,
    /// Mandatory or allowed
    pub kind: BreakKind,
}

impl OpportunityDto {
    /// Convert an engine event; prohibited positions have no DTO.
    pub fn from_event(event: &BreakEvent) -> Option<Self> {
        let kind = match event.opportunity {
            BreakOpportunity::Mandatory => BreakKind::Mandatory,
            BreakOpportunity::Allowed => BreakKind::Allowed,
            BreakOpportunity::Prohibited | BreakOpportunity::Indirect => return None,
        };
        Some(Self {
            index: event.index,
            after: event.after(),
            byte_offset: event.byte_offset,
            kind,
        })
    }
}

/// Processing metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Unicode version of the compiled-in tables
    pub unicode_version: String,
    /// Total code points processed
    pub total_chars: usize,
    /// Total bytes processed (UTF-8)
    pub total_bytes: usize,
    /// Number of allowed breaks
    pub allowed_breaks: usize,
    /// Number of mandatory breaks
    pub mandatory_breaks: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Complete output with break opportunities and metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Allowed and mandatory breaks in text order
    pub opportunities: Vec<OpportunityDto>,
    /// Processing metadata
    pub metadata: Metadata,
}

impl Output {
    /// Byte offsets of every break, for slicing the original text
    pub fn byte_offsets(&self) -> Vec<usize> {
        self.opportunities.iter().map(|o| o.byte_offset).collect()
    }

    /// Serialize to a JSON string
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to an indented JSON string
    #[cfg(feature = "serde")]
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
