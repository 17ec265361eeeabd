//! Context resolution of raw property values
//!
//! The database assigns some characters values that only make sense once
//! the caller's context is known: ambiguous widths, conditional Japanese
//! starters, quotation marks with no direction. [`Resolver`] turns the raw
//! values into the ones the pair matrix consumes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::class::{EastAsianWidth, LineBreakClass};
use crate::config::{Config, RuleVariant};
use crate::tables::{self, contains};

/// Ambiguous-width Latin, Greek and Cyrillic letters.
static AMBIGUOUS_ALPHABETICS: &[(u32, u32)] = &[
    (0x00C6, 0x00C6),
    (0x00D0, 0x00D0),
    (0x00D8, 0x00D8),
    (0x00DE, 0x00E1),
    (0x00E6, 0x00E6),
    (0x00E8, 0x00EA),
    (0x00EC, 0x00ED),
    (0x00F0, 0x00F0),
    (0x00F2, 0x00F3),
    (0x00F8, 0x00FA),
    (0x00FC, 0x00FC),
    (0x00FE, 0x00FE),
    (0x0101, 0x0101),
    (0x0111, 0x0111),
    (0x0113, 0x0113),
    (0x011B, 0x011B),
    (0x0126, 0x0127),
    (0x012B, 0x012B),
    (0x0131, 0x0133),
    (0x0138, 0x0138),
    (0x013F, 0x0142),
    (0x0144, 0x0144),
    (0x0148, 0x014B),
    (0x014D, 0x014D),
    (0x0152, 0x0153),
    (0x0166, 0x0167),
    (0x016B, 0x016B),
    (0x01CE, 0x01CE),
    (0x01D0, 0x01D0),
    (0x01D2, 0x01D2),
    (0x01D4, 0x01D4),
    (0x01D6, 0x01D6),
    (0x01D8, 0x01D8),
    (0x01DA, 0x01DA),
    (0x01DC, 0x01DC),
    (0x0251, 0x0251),
    (0x0261, 0x0261),
    (0x0391, 0x03A9),
    (0x03B1, 0x03C1),
    (0x03C3, 0x03C9),
    (0x0401, 0x0401),
    (0x0410, 0x044F),
    (0x0451, 0x0451),
];

/// Small kana, prolonged sound marks, iteration marks and the masu mark.
static KANA_NONSTARTERS: &[(u32, u32)] = &[
    (0x3005, 0x3005),
    (0x303B, 0x303C),
    (0x3041, 0x3041),
    (0x3043, 0x3043),
    (0x3045, 0x3045),
    (0x3047, 0x3047),
    (0x3049, 0x3049),
    (0x3063, 0x3063),
    (0x3083, 0x3083),
    (0x3085, 0x3085),
    (0x3087, 0x3087),
    (0x308E, 0x308E),
    (0x3095, 0x3096),
    (0x309D, 0x309E),
    (0x30A1, 0x30A1),
    (0x30A3, 0x30A3),
    (0x30A5, 0x30A5),
    (0x30A7, 0x30A7),
    (0x30A9, 0x30A9),
    (0x30C3, 0x30C3),
    (0x30E3, 0x30E3),
    (0x30E5, 0x30E5),
    (0x30E7, 0x30E7),
    (0x30EE, 0x30EE),
    (0x30F5, 0x30F6),
    (0x30FC, 0x30FE),
    (0x31F0, 0x31FF),
    (0xFF67, 0xFF70),
];

/// Quotation marks and guillemets that open a quotation.
static OPENING_QUOTES: &[(u32, u32)] = &[
    (0x00AB, 0x00AB),
    (0x2018, 0x2018),
    (0x201C, 0x201C),
    (0x2039, 0x2039),
];

/// Quotation marks and guillemets that close a quotation.
static CLOSING_QUOTES: &[(u32, u32)] = &[
    (0x00BB, 0x00BB),
    (0x2019, 0x2019),
    (0x201D, 0x201D),
    (0x203A, 0x203A),
];

/// Currency and symbol signs that legacy East Asian fonts draw wide.
static QUESTIONABLE_NARROW_SIGNS: &[(u32, u32)] = &[
    (0x00A2, 0x00A3),
    (0x00A5, 0x00A6),
    (0x00AC, 0x00AC),
    (0x00AF, 0x00AF),
];

/// Direction of a quotation mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QuoteDirection {
    /// Behaves like opening punctuation when it precedes its partner
    Opening,
    /// Behaves like closing punctuation when it follows its partner
    Closing,
}

/// Property values after context resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Resolved {
    /// Resolved width; never [`EastAsianWidth::Ambiguous`] unless tailored so
    pub width: EastAsianWidth,
    /// Resolved class; never `AI`, `CJ`, `SG` or `XX` unless tailored so
    pub class: LineBreakClass,
    /// Direction of a quotation mark, when the quote exception set is enabled
    pub quote: Option<QuoteDirection>,
    /// Unassigned code point reserved for pictographs; takes emoji modifiers
    pub unassigned_pictographic: bool,
}

/// Applies a [`Config`] to raw property values.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    config: &'a Config,
}

impl<'a> Resolver<'a> {
    /// Create a resolver bound to a configuration.
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Look up and resolve a character.
    pub fn resolve_char(&self, c: char) -> Resolved {
        self.resolve(c, EastAsianWidth::of(c), LineBreakClass::of(c))
    }

    /// Resolve raw values for `c`.
    ///
    /// Width is settled first because `AI` resolution depends on it.
    /// Tailoring overrides are applied last and always win.
    pub fn resolve(&self, c: char, width: EastAsianWidth, class: LineBreakClass) -> Resolved {
        let cp = c as u32;
        let config = self.config;
        let exceptions = config.exceptions();

        let mut width = match width {
            EastAsianWidth::Ambiguous
                if exceptions.narrow_ambiguous_alphabetics
                    && contains(AMBIGUOUS_ALPHABETICS, cp) =>
            {
                EastAsianWidth::Narrow
            }
            EastAsianWidth::Ambiguous if config.ambiguous_as_wide() => EastAsianWidth::Wide,
            EastAsianWidth::Ambiguous => EastAsianWidth::Narrow,
            other => other,
        };
        if config.ambiguous_as_wide()
            && !config.legacy_narrow_signs()
            && contains(QUESTIONABLE_NARROW_SIGNS, cp)
        {
            width = EastAsianWidth::Wide;
        }
        if let Some(w) = config.width_tailoring(c) {
            width = w;
        }

        let mut class = class;
        if exceptions.kana_nonstarters
            && config.rule_variant() != RuleVariant::Loose
            && contains(KANA_NONSTARTERS, cp)
        {
            class = LineBreakClass::NS;
        }
        class = match class {
            LineBreakClass::AI if width == EastAsianWidth::Wide => LineBreakClass::ID,
            LineBreakClass::AI | LineBreakClass::SG | LineBreakClass::XX => LineBreakClass::AL,
            LineBreakClass::CJ if config.rule_variant() == RuleVariant::Strict => {
                LineBreakClass::NS
            }
            LineBreakClass::CJ => LineBreakClass::ID,
            LineBreakClass::H2
            | LineBreakClass::H3
            | LineBreakClass::JL
            | LineBreakClass::JV
            | LineBreakClass::JT
                if config.hangul_as_al() =>
            {
                LineBreakClass::AL
            }
            other => other,
        };
        if let Some(tailored) = config.class_tailoring(c) {
            class = tailored;
        }

        let quote = if exceptions.quote_direction && class == LineBreakClass::QU {
            quote_direction(cp)
        } else {
            None
        };

        Resolved {
            width,
            class,
            quote,
            unassigned_pictographic: tables::is_unassigned_pictographic(cp),
        }
    }
}

fn quote_direction(cp: u32) -> Option<QuoteDirection> {
    if contains(OPENING_QUOTES, cp) {
        Some(QuoteDirection::Opening)
    } else if contains(CLOSING_QUOTES, cp) {
        Some(QuoteDirection::Closing)
    } else {
        None
    }
}

/// Whether `c` is one of the small kana or marks treated as nonstarters.
pub fn is_kana_nonstarter(c: char) -> bool {
    contains(KANA_NONSTARTERS, c as u32)
}

/// Whether `c` is an ambiguous-width Latin, Greek or Cyrillic letter.
pub fn is_ambiguous_alphabetic(c: char) -> bool {
    contains(AMBIGUOUS_ALPHABETICS, c as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExceptionSets;

    fn sorted(set: &[(u32, u32)]) -> bool {
        set.windows(2).all(|w| w[0].1 < w[1].0) && set.iter().all(|r| r.0 <= r.1)
    }

    #[test]
    fn test_exception_sets_are_sorted() {
        assert!(sorted(AMBIGUOUS_ALPHABETICS));
        assert!(sorted(KANA_NONSTARTERS));
        assert!(sorted(OPENING_QUOTES));
        assert!(sorted(CLOSING_QUOTES));
        assert!(sorted(QUESTIONABLE_NARROW_SIGNS));
    }

    #[test]
    fn test_ambiguous_cyrillic_width() {
        let c = '\u{0410}';

        let narrow = Config::default();
        assert_eq!(Resolver::new(&narrow).resolve_char(c).width, EastAsianWidth::Narrow);

        let wide = Config::east_asian();
        assert_eq!(Resolver::new(&wide).resolve_char(c).width, EastAsianWidth::Wide);

        let overridden = Config::builder()
            .ambiguous_as_wide(true)
            .exceptions(ExceptionSets {
                narrow_ambiguous_alphabetics: true,
                ..ExceptionSets::default()
            })
            .build()
            .unwrap();
        assert_eq!(
            Resolver::new(&overridden).resolve_char(c).width,
            EastAsianWidth::Narrow
        );
        // Not an alphabetic: still wide.
        assert_eq!(
            Resolver::new(&overridden).resolve_char('\u{00A7}').width,
            EastAsianWidth::Wide
        );
    }

    #[test]
    fn test_ai_follows_resolved_width() {
        let c = '\u{00A7}';
        assert_eq!(LineBreakClass::of(c), LineBreakClass::AI);
        assert_eq!(
            Resolver::new(&Config::default()).resolve_char(c).class,
            LineBreakClass::AL
        );
        assert_eq!(
            Resolver::new(&Config::east_asian()).resolve_char(c).class,
            LineBreakClass::ID
        );
    }

    #[test]
    fn test_questionable_narrow_signs() {
        let yen = '\u{00A5}';
        assert_eq!(
            Resolver::new(&Config::default()).resolve_char(yen).width,
            EastAsianWidth::Narrow
        );
        assert_eq!(
            Resolver::new(&Config::east_asian()).resolve_char(yen).width,
            EastAsianWidth::Wide
        );
        let legacy = Config::builder()
            .ambiguous_as_wide(true)
            .legacy_narrow_signs(true)
            .build()
            .unwrap();
        assert_eq!(
            Resolver::new(&legacy).resolve_char(yen).width,
            EastAsianWidth::Narrow
        );
    }

    #[test]
    fn test_kana_nonstarters_by_variant() {
        let small_a = '\u{3041}';
        let normal = Config::default();
        assert_eq!(
            Resolver::new(&normal).resolve_char(small_a).class,
            LineBreakClass::NS
        );

        let loose = Config::builder()
            .rule_variant(RuleVariant::Loose)
            .build()
            .unwrap();
        assert_eq!(
            Resolver::new(&loose).resolve_char(small_a).class,
            LineBreakClass::ID
        );

        let no_exceptions = Config::builder()
            .exceptions(ExceptionSets {
                kana_nonstarters: false,
                ..ExceptionSets::default()
            })
            .build()
            .unwrap();
        assert_eq!(
            Resolver::new(&no_exceptions).resolve_char(small_a).class,
            LineBreakClass::ID
        );
        assert_eq!(
            Resolver::new(&Config::strict()).resolve_char(small_a).class,
            LineBreakClass::NS
        );
    }

    #[test]
    fn test_quote_direction() {
        let config = Config::default();
        let resolver = Resolver::new(&config);
        assert_eq!(
            resolver.resolve_char('\u{201C}').quote,
            Some(QuoteDirection::Opening)
        );
        assert_eq!(
            resolver.resolve_char('\u{201D}').quote,
            Some(QuoteDirection::Closing)
        );
        assert_eq!(resolver.resolve_char('"').quote, None);
        assert_eq!(resolver.resolve_char('a').quote, None);

        let off = Config::builder()
            .exceptions(ExceptionSets {
                quote_direction: false,
                ..ExceptionSets::default()
            })
            .build()
            .unwrap();
        assert_eq!(Resolver::new(&off).resolve_char('\u{201C}').quote, None);
    }

    #[test]
    fn test_unassigned_resolves_to_al() {
        let config = Config::default();
        let resolved = Resolver::new(&config).resolve_char('\u{E0000}');
        assert_eq!(resolved.class, LineBreakClass::AL);
        assert_eq!(resolved.width, EastAsianWidth::Neutral);
    }

    #[test]
    fn test_hangul_as_al() {
        let config = Config::builder().hangul_as_al(true).build().unwrap();
        assert_eq!(
            Resolver::new(&config).resolve_char('\u{AC00}').class,
            LineBreakClass::AL
        );
        assert_eq!(
            Resolver::new(&Config::default()).resolve_char('\u{AC00}').class,
            LineBreakClass::H2
        );
    }

    #[test]
    fn test_tailoring_wins() {
        let config = Config::builder()
            .tailor_class('\u{3041}', LineBreakClass::ID)
            .tailor_width('a', EastAsianWidth::Wide)
            .build()
            .unwrap();
        let resolver = Resolver::new(&config);
        assert_eq!(resolver.resolve_char('\u{3041}').class, LineBreakClass::ID);
        assert_eq!(resolver.resolve_char('a').width, EastAsianWidth::Wide);
    }
}
