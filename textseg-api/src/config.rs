//! High-level configuration API

use textseg_core::{EastAsianWidth, ExceptionSets, LineBreakClass, RuleVariant};
use textseg_engine::{EngineConfig, ExecutionMode, WrapOptions};

use crate::error::{ApiError, Result};

/// High-level configuration for line breaking
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub(crate) inner: EngineConfig,
}

impl Config {
    /// Configuration for East Asian text (ambiguous characters are wide)
    pub fn east_asian() -> Self {
        Self {
            inner: EngineConfig::new(textseg_core::Config::east_asian()),
        }
    }

    /// Strict Japanese line breaking in East Asian context
    pub fn strict() -> Self {
        Self {
            inner: EngineConfig::new(textseg_core::Config::strict()),
        }
    }

    /// Parse a TOML configuration document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(Self {
            inner: EngineConfig::from_toml_str(source)?,
        })
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Engine configuration behind this config
    pub fn engine_config(&self) -> &EngineConfig {
        &self.inner
    }

    /// Classification policy behind this config
    pub fn classification(&self) -> &textseg_core::Config {
        &self.inner.classification
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    classification: textseg_core::ConfigBuilder,
    engine: EngineConfig,
}

impl ConfigBuilder {
    /// Treat East Asian ambiguous characters as wide
    pub fn ambiguous_as_wide(mut self, on: bool) -> Self {
        self.classification = self.classification.ambiguous_as_wide(on);
        self
    }

    /// Keep the questionable narrow signs narrow in East Asian context
    pub fn legacy_narrow_signs(mut self, on: bool) -> Self {
        self.classification = self.classification.legacy_narrow_signs(on);
        self
    }

    /// Hand complex-context runs to the attached word breaker
    pub fn enable_sea_segmentation(mut self, on: bool) -> Self {
        self.classification = self.classification.enable_sea_segmentation(on);
        self
    }

    /// Set the Japanese strictness
    pub fn rule_variant(mut self, variant: RuleVariant) -> Self {
        self.classification = self.classification.rule_variant(variant);
        self
    }

    /// Choose the exception sets
    pub fn exceptions(mut self, exceptions: ExceptionSets) -> Self {
        self.classification = self.classification.exceptions(exceptions);
        self
    }

    /// Treat Hangul syllables and jamo as alphabetic
    pub fn hangul_as_al(mut self, on: bool) -> Self {
        self.classification = self.classification.hangul_as_al(on);
        self
    }

    /// Treat a combining mark after a space as an isolated ideograph
    pub fn legacy_cm(mut self, on: bool) -> Self {
        self.classification = self.classification.legacy_cm(on);
        self
    }

    /// Override the line break class of one character
    pub fn tailor_class(mut self, c: char, class: LineBreakClass) -> Self {
        self.classification = self.classification.tailor_class(c, class);
        self
    }

    /// Override the East Asian width of one character
    pub fn tailor_width(mut self, c: char, width: EastAsianWidth) -> Self {
        self.classification = self.classification.tailor_width(c, width);
        self
    }

    /// Allow a break after leading spaces
    pub fn break_indent(mut self, on: bool) -> Self {
        self.classification = self.classification.break_indent(on);
        self
    }

    /// Pin the Unicode version
    pub fn unicode_version(mut self, version: &str) -> Self {
        self.classification = self.classification.unicode_version(version);
        self
    }

    /// Include start-of-text and end-of-text events in engine output
    pub fn emit_text_edges(mut self, on: bool) -> Self {
        self.engine.emit_text_edges = on;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.engine.execution_mode = mode;
        self
    }

    /// Set thread count
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.engine.threads = threads;
        self
    }

    /// Set the options used by `wrap`
    pub fn wrap(mut self, options: WrapOptions) -> Self {
        self.engine.wrap = options;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut inner = self.engine;
        inner.classification = self.classification.build()?;
        inner
            .validate()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(Config { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_round_trip() {
        let config = Config::builder()
            .ambiguous_as_wide(true)
            .rule_variant(RuleVariant::Strict)
            .emit_text_edges(false)
            .threads(Some(2))
            .build()
            .unwrap();
        assert!(config.classification().ambiguous_as_wide());
        assert_eq!(config.classification().rule_variant(), RuleVariant::Strict);
        assert!(!config.engine_config().emit_text_edges);
        assert_eq!(config.engine_config().threads, Some(2));
    }

    #[test]
    fn test_builder_forwards_tailoring() {
        let config = Config::builder()
            .hangul_as_al(true)
            .legacy_cm(true)
            .tailor_class('\u{30FC}', LineBreakClass::ID)
            .tailor_width('\u{00B7}', EastAsianWidth::Wide)
            .wrap(WrapOptions::with_width(20))
            .build()
            .unwrap();
        let c = config.classification();
        assert!(c.hangul_as_al());
        assert!(c.legacy_cm());
        assert_eq!(c.class_tailoring('\u{30FC}'), Some(LineBreakClass::ID));
        assert_eq!(c.width_tailoring('\u{00B7}'), Some(EastAsianWidth::Wide));
        assert_eq!(config.engine_config().wrap.width, 20);
    }

    #[test]
    fn test_builder_rejects_bad_values() {
        assert!(matches!(
            Config::builder().threads(Some(0)).build(),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(
            Config::builder().unicode_version("9.0.0").build(),
            Err(ApiError::Engine(_))
        ));
    }

    #[test]
    fn test_presets() {
        assert!(!Config::default().classification().ambiguous_as_wide());
        assert!(Config::east_asian().classification().ambiguous_as_wide());
        assert_eq!(
            Config::strict().classification().rule_variant(),
            RuleVariant::Strict
        );
    }
}
