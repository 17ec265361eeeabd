//! Configuration types for the engine

use serde::{Deserialize, Serialize};
use textseg_core::Config;

use crate::error::{EngineError, Result};
use crate::wrap::WrapOptions;
use crate::ExecutionMode;

/// Engine configuration
///
/// Wraps the classification [`Config`] with the knobs that only matter to
/// the engine. Can be read from a TOML document:
///
/// ```toml
/// emit_text_edges = true
/// execution_mode = "adaptive"
///
/// [classification]
/// ambiguous_as_wide = true
/// rule_variant = "strict"
///
/// [wrap]
/// width = 72
/// format = "trim"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Classification and pairing policy
    pub classification: Config,
    /// Emit the start-of-text and end-of-text events
    pub emit_text_edges: bool,
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = auto)
    pub threads: Option<usize>,
    /// Minimum text size in bytes for parallel processing
    pub parallel_threshold: usize,
    /// Target chunk size in bytes when splitting one text across threads
    pub chunk_target_bytes: usize,
    /// Options for column-width wrapping
    pub wrap: WrapOptions,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            classification: Config::default(),
            emit_text_edges: true,
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 256 * 1024, // 256KB
            chunk_target_bytes: 64 * 1024,
            wrap: WrapOptions::default(),
        }
    }
}

impl EngineConfig {
    /// Wrap a classification config with default engine settings.
    pub fn new(classification: Config) -> Self {
        Self {
            classification,
            ..Self::default()
        }
    }

    /// Create a configuration that never spawns threads
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            parallel_threshold: usize::MAX, // Never use parallel
            ..Self::default()
        }
    }

    /// Create a fast configuration optimized for large inputs
    pub fn fast() -> Self {
        Self {
            parallel_threshold: 64 * 1024,
            chunk_target_bytes: 16 * 1024,
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.classification.validate()?;
        if self.threads == Some(0) {
            return Err(EngineError::Config(
                "threads must be at least 1".to_string(),
            ));
        }
        if self.chunk_target_bytes == 0 {
            return Err(EngineError::Config(
                "chunk_target_bytes must be positive".to_string(),
            ));
        }
        self.wrap.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textseg_core::{CoreError, RuleVariant};
    use crate::wrap::{LineFormat, UrgentBreak};

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert!(config.emit_text_edges);
        assert_eq!(config.execution_mode, ExecutionMode::Adaptive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let config = EngineConfig::from_toml_str(
            r#"
            emit_text_edges = false
            execution_mode = "sequential"

            [classification]
            ambiguous_as_wide = true
            rule_variant = "strict"
            break_indent = true

            [classification.exceptions]
            narrow_ambiguous_alphabetics = true

            [classification.class_tailoring]
            "ー" = "ID"
            "#,
        )
        .unwrap();

        assert!(!config.emit_text_edges);
        assert_eq!(config.execution_mode, ExecutionMode::Sequential);
        let c = &config.classification;
        assert!(c.ambiguous_as_wide());
        assert_eq!(c.rule_variant(), RuleVariant::Strict);
        assert!(c.break_indent());
        assert!(c.exceptions().narrow_ambiguous_alphabetics);
        // Unspecified exception flags keep their defaults.
        assert!(c.exceptions().kana_nonstarters);
        assert_eq!(
            c.class_tailoring('\u{30FC}'),
            Some(textseg_core::LineBreakClass::ID)
        );
    }

    #[test]
    fn test_wrap_from_toml() {
        let config = EngineConfig::from_toml_str(
            r#"
            [wrap]
            width = 40
            newline = "\r\n"
            format = "newline"
            urgent = "error"
            "#,
        )
        .unwrap();
        assert_eq!(config.wrap.width, 40);
        assert_eq!(config.wrap.newline, "\r\n");
        assert_eq!(config.wrap.format, LineFormat::Newline);
        assert_eq!(config.wrap.urgent, UrgentBreak::Error);
        assert_eq!(config.wrap.char_max, 998);

        assert!(matches!(
            EngineConfig::from_toml_str("[wrap]\nwidth = 10\nmin_width = 20"),
            Err(EngineError::Config(_))
        ));
    }

    #[test]
    fn test_from_toml_rejects_bad_input() {
        assert!(matches!(
            EngineConfig::from_toml_str("emit_text_edges = \"yes\""),
            Err(EngineError::Toml(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml_str("threads = 0"),
            Err(EngineError::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml_str("[classification]\nunicode_version = \"6.2.0\""),
            Err(EngineError::Core(CoreError::UnsupportedUnicodeVersion { .. }))
        ));
    }
}
