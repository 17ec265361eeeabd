//! Classification and pairing configuration
//!
//! A [`Config`] is immutable once built; the engine shares it read-only
//! across every segmentation call.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::class::{EastAsianWidth, LineBreakClass};
use crate::error::{CoreError, Result};
use crate::tables::UNICODE_VERSION;

/// Strictness of Japanese line breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RuleVariant {
    /// `CJ` resolves to `ID`; small kana may start a line.
    Loose,
    /// `CJ` resolves to `ID`, while the kana nonstarter set still applies.
    #[default]
    Normal,
    /// `CJ` resolves to `NS`.
    Strict,
}

/// Which built-in exception sets the resolver consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExceptionSets {
    /// Keep ambiguous Latin, Greek and Cyrillic letters narrow even when
    /// ambiguous characters are treated as wide.
    pub narrow_ambiguous_alphabetics: bool,
    /// Small kana, prolonged sound marks and iteration marks are nonstarters.
    pub kana_nonstarters: bool,
    /// Give opening and closing quotation marks a direction when pairing.
    pub quote_direction: bool,
}

impl Default for ExceptionSets {
    fn default() -> Self {
        Self {
            narrow_ambiguous_alphabetics: false,
            kana_nonstarters: true,
            quote_direction: true,
        }
    }
}

/// Configuration for classification and break pairing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    ambiguous_as_wide: bool,
    legacy_narrow_signs: bool,
    enable_sea_segmentation: bool,
    rule_variant: RuleVariant,
    exceptions: ExceptionSets,
    hangul_as_al: bool,
    legacy_cm: bool,
    break_indent: bool,
    class_tailoring: BTreeMap<char, LineBreakClass>,
    width_tailoring: BTreeMap<char, EastAsianWidth>,
    unicode_version: Option<String>,
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Preset for East Asian text: ambiguous characters are wide.
    pub fn east_asian() -> Self {
        Self {
            ambiguous_as_wide: true,
            ..Self::default()
        }
    }

    /// Preset for strict Japanese line breaking.
    pub fn strict() -> Self {
        Self {
            ambiguous_as_wide: true,
            rule_variant: RuleVariant::Strict,
            ..Self::default()
        }
    }

    /// Whether East Asian ambiguous characters occupy two columns.
    pub fn ambiguous_as_wide(&self) -> bool {
        self.ambiguous_as_wide
    }

    /// Whether the questionable narrow signs stay narrow in East Asian context.
    pub fn legacy_narrow_signs(&self) -> bool {
        self.legacy_narrow_signs
    }

    /// Whether complex-context runs are handed to a word breaker.
    pub fn enable_sea_segmentation(&self) -> bool {
        self.enable_sea_segmentation
    }

    /// Japanese strictness.
    pub fn rule_variant(&self) -> RuleVariant {
        self.rule_variant
    }

    /// Enabled exception sets.
    pub fn exceptions(&self) -> ExceptionSets {
        self.exceptions
    }

    /// Whether Hangul syllables and jamo are treated as alphabetics.
    pub fn hangul_as_al(&self) -> bool {
        self.hangul_as_al
    }

    /// Whether isolated combining marks resolve to `ID` instead of `AL`.
    pub fn legacy_cm(&self) -> bool {
        self.legacy_cm
    }

    /// Whether a break is allowed after leading spaces on a line.
    pub fn break_indent(&self) -> bool {
        self.break_indent
    }

    /// Per-character class override, if any.
    pub fn class_tailoring(&self, c: char) -> Option<LineBreakClass> {
        self.class_tailoring.get(&c).copied()
    }

    /// Per-character width override, if any.
    pub fn width_tailoring(&self, c: char) -> Option<EastAsianWidth> {
        self.width_tailoring.get(&c).copied()
    }

    /// Requested Unicode version, if pinned.
    pub fn unicode_version(&self) -> Option<&str> {
        self.unicode_version.as_deref()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(requested) = &self.unicode_version {
            if !version_matches(requested, UNICODE_VERSION) {
                return Err(CoreError::UnsupportedUnicodeVersion {
                    requested: requested.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Compare dotted versions; missing components count as zero.
fn version_matches(requested: &str, compiled: &str) -> bool {
    fn parts(v: &str) -> Option<[u32; 3]> {
        let mut out = [0u32; 3];
        let mut it = v.trim().split('.');
        for slot in out.iter_mut() {
            match it.next() {
                Some(p) => *slot = p.parse().ok()?,
                None => break,
            }
        }
        if it.next().is_some() {
            return None;
        }
        Some(out)
    }

    match (parts(requested), parts(compiled)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Builder for [`Config`]
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Treat East Asian ambiguous characters as wide.
    pub fn ambiguous_as_wide(mut self, on: bool) -> Self {
        self.config.ambiguous_as_wide = on;
        self
    }

    /// Keep the questionable narrow signs narrow in East Asian context.
    pub fn legacy_narrow_signs(mut self, on: bool) -> Self {
        self.config.legacy_narrow_signs = on;
        self
    }

    /// Hand complex-context runs to a word breaker.
    pub fn enable_sea_segmentation(mut self, on: bool) -> Self {
        self.config.enable_sea_segmentation = on;
        self
    }

    /// Set Japanese strictness.
    pub fn rule_variant(mut self, variant: RuleVariant) -> Self {
        self.config.rule_variant = variant;
        self
    }

    /// Replace the exception set selection.
    pub fn exceptions(mut self, exceptions: ExceptionSets) -> Self {
        self.config.exceptions = exceptions;
        self
    }

    /// Treat Hangul as alphabetic.
    pub fn hangul_as_al(mut self, on: bool) -> Self {
        self.config.hangul_as_al = on;
        self
    }

    /// Resolve isolated combining marks to `ID`.
    pub fn legacy_cm(mut self, on: bool) -> Self {
        self.config.legacy_cm = on;
        self
    }

    /// Allow a break after leading spaces.
    pub fn break_indent(mut self, on: bool) -> Self {
        self.config.break_indent = on;
        self
    }

    /// Override the line break class of one character.
    pub fn tailor_class(mut self, c: char, class: LineBreakClass) -> Self {
        self.config.class_tailoring.insert(c, class);
        self
    }

    /// Override the width of one character.
    pub fn tailor_width(mut self, c: char, width: EastAsianWidth) -> Self {
        self.config.width_tailoring.insert(c, width);
        self
    }

    /// Pin the Unicode version; construction fails if it is not compiled in.
    pub fn unicode_version(mut self, version: &str) -> Self {
        self.config.unicode_version = Some(version.to_string());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.ambiguous_as_wide());
        assert_eq!(config.rule_variant(), RuleVariant::Normal);
        assert!(config.exceptions().kana_nonstarters);
        assert!(config.exceptions().quote_direction);
        assert!(!config.exceptions().narrow_ambiguous_alphabetics);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = Config::builder()
            .ambiguous_as_wide(true)
            .rule_variant(RuleVariant::Strict)
            .tailor_class('\u{30FC}', LineBreakClass::ID)
            .build()
            .unwrap();
        assert!(config.ambiguous_as_wide());
        assert_eq!(config.class_tailoring('\u{30FC}'), Some(LineBreakClass::ID));
        assert_eq!(config.class_tailoring('a'), None);
    }

    #[test]
    fn test_unicode_version_check() {
        assert!(Config::builder().unicode_version("14.0.0").build().is_ok());
        assert!(Config::builder().unicode_version("14.0").build().is_ok());
        assert!(Config::builder().unicode_version("14").build().is_ok());

        let err = Config::builder().unicode_version("15.1.0").build().unwrap_err();
        assert_eq!(
            err,
            CoreError::UnsupportedUnicodeVersion {
                requested: "15.1.0".to_string()
            }
        );
        assert!(Config::builder().unicode_version("fourteen").build().is_err());
        assert!(Config::builder().unicode_version("14.0.0.1").build().is_err());
    }

    #[test]
    fn test_presets() {
        assert!(Config::east_asian().ambiguous_as_wide());
        assert_eq!(Config::strict().rule_variant(), RuleVariant::Strict);
    }
}
