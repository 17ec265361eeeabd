//! Line break classes (UAX #14) and East Asian Width values (UAX #11)

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tables;

/// Line_Break property value.
///
/// Variant names are the two or three letter abbreviations used by the
/// Unicode Character Database. The discriminant doubles as the index into
/// the pair matrix.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum LineBreakClass {
    /// Mandatory break
    BK,
    /// Carriage return
    CR,
    /// Line feed
    LF,
    /// Next line
    NL,
    /// Space
    SP,
    /// Opening punctuation
    OP,
    /// Closing punctuation
    CL,
    /// Closing parenthesis
    CP,
    /// Ambiguous quotation
    QU,
    /// Non-breaking ("glue")
    GL,
    /// Nonstarter
    NS,
    /// Exclamation / interrogation
    EX,
    /// Symbols allowing break after
    SY,
    /// Infix numeric separator
    IS,
    /// Prefix numeric
    PR,
    /// Postfix numeric
    PO,
    /// Numeric
    NU,
    /// Alphabetic
    AL,
    /// Hebrew letter
    HL,
    /// Ideographic
    ID,
    /// Inseparable
    IN,
    /// Hyphen
    HY,
    /// Break after
    BA,
    /// Break before
    BB,
    /// Break opportunity before and after
    B2,
    /// Contingent break opportunity
    CB,
    /// Zero width space
    ZW,
    /// Combining mark
    CM,
    /// Word joiner
    WJ,
    /// Hangul LV syllable
    H2,
    /// Hangul LVT syllable
    H3,
    /// Hangul L jamo
    JL,
    /// Hangul V jamo
    JV,
    /// Hangul T jamo
    JT,
    /// Surrogate
    SG,
    /// Ambiguous (alphabetic or ideographic)
    AI,
    /// Conditional Japanese starter
    CJ,
    /// Complex context dependent (South East Asian)
    SA,
    /// Unknown
    XX,
    /// Regional indicator
    RI,
    /// Emoji base
    EB,
    /// Emoji modifier
    EM,
    /// Zero width joiner
    ZWJ,
}

impl LineBreakClass {
    /// Number of classes, and the dimension of the pair matrix.
    pub const COUNT: usize = 43;

    /// Every class in discriminant order.
    pub const ALL: [LineBreakClass; Self::COUNT] = {
        use LineBreakClass::*;
        [
            BK, CR, LF, NL, SP, OP, CL, CP, QU, GL, NS, EX, SY, IS, PR, PO, NU, AL, HL, ID, IN,
            HY, BA, BB, B2, CB, ZW, CM, WJ, H2, H3, JL, JV, JT, SG, AI, CJ, SA, XX, RI, EB, EM,
            ZWJ,
        ]
    };

    /// Base class of a character as recorded in the database.
    ///
    /// Unassigned code points report [`LineBreakClass::XX`]. No tailoring is
    /// applied; see [`crate::Resolver`] for that.
    pub fn of(c: char) -> Self {
        tables::line_break(c as u32)
    }

    /// Abbreviated property value name.
    pub const fn abbr(self) -> &'static str {
        use LineBreakClass::*;
        match self {
            BK => "BK",
            CR => "CR",
            LF => "LF",
            NL => "NL",
            SP => "SP",
            OP => "OP",
            CL => "CL",
            CP => "CP",
            QU => "QU",
            GL => "GL",
            NS => "NS",
            EX => "EX",
            SY => "SY",
            IS => "IS",
            PR => "PR",
            PO => "PO",
            NU => "NU",
            AL => "AL",
            HL => "HL",
            ID => "ID",
            IN => "IN",
            HY => "HY",
            BA => "BA",
            BB => "BB",
            B2 => "B2",
            CB => "CB",
            ZW => "ZW",
            CM => "CM",
            WJ => "WJ",
            H2 => "H2",
            H3 => "H3",
            JL => "JL",
            JV => "JV",
            JT => "JT",
            SG => "SG",
            AI => "AI",
            CJ => "CJ",
            SA => "SA",
            XX => "XX",
            RI => "RI",
            EB => "EB",
            EM => "EM",
            ZWJ => "ZWJ",
        }
    }

    /// Class used when looking up the pair matrix.
    ///
    /// Classes that LB1 leaves to the resolver collapse to what the default
    /// algorithm assumes; complex-context letters behave as alphabetics.
    pub const fn pairing(self) -> Self {
        use LineBreakClass::*;
        match self {
            AI | SG | XX | SA => AL,
            CJ => NS,
            other => other,
        }
    }

    /// True for classes that force a break after them.
    pub const fn is_mandatory(self) -> bool {
        matches!(self, LineBreakClass::BK | LineBreakClass::CR | LineBreakClass::LF | LineBreakClass::NL)
    }
}

impl fmt::Display for LineBreakClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbr())
    }
}

/// Error returned when parsing an unknown class or width abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownPropertyValue;

impl fmt::Display for UnknownPropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown property value")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownPropertyValue {}

impl FromStr for LineBreakClass {
    type Err = UnknownPropertyValue;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|class| class.abbr().eq_ignore_ascii_case(s))
            .ok_or(UnknownPropertyValue)
    }
}

/// East_Asian_Width property value, plus [`EastAsianWidth::Zero`] for
/// nonspacing code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EastAsianWidth {
    /// `N`
    #[cfg_attr(feature = "serde", serde(alias = "N"))]
    Neutral,
    /// `A`
    #[cfg_attr(feature = "serde", serde(alias = "A"))]
    Ambiguous,
    /// `W`
    #[cfg_attr(feature = "serde", serde(alias = "W"))]
    Wide,
    /// `Na`
    #[cfg_attr(feature = "serde", serde(alias = "Na"))]
    Narrow,
    /// `H`
    #[cfg_attr(feature = "serde", serde(alias = "H"))]
    Halfwidth,
    /// `F`
    #[cfg_attr(feature = "serde", serde(alias = "F"))]
    Fullwidth,
    /// `Z`: nonspacing marks, enclosing marks, format characters and
    /// conjoining jamo medials/finals.
    #[cfg_attr(feature = "serde", serde(alias = "Z"))]
    Zero,
}

impl EastAsianWidth {
    /// Base width of a character as recorded in the database.
    pub fn of(c: char) -> Self {
        tables::east_asian_width(c as u32)
    }

    /// Abbreviated property value name.
    pub const fn abbr(self) -> &'static str {
        match self {
            EastAsianWidth::Neutral => "N",
            EastAsianWidth::Ambiguous => "A",
            EastAsianWidth::Wide => "W",
            EastAsianWidth::Narrow => "Na",
            EastAsianWidth::Halfwidth => "H",
            EastAsianWidth::Fullwidth => "F",
            EastAsianWidth::Zero => "Z",
        }
    }

    /// Display columns occupied by a character of this width.
    pub const fn columns(self, ambiguous_as_wide: bool) -> usize {
        match self {
            EastAsianWidth::Zero => 0,
            EastAsianWidth::Wide | EastAsianWidth::Fullwidth => 2,
            EastAsianWidth::Ambiguous if ambiguous_as_wide => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for EastAsianWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbr())
    }
}

impl FromStr for EastAsianWidth {
    type Err = UnknownPropertyValue;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        const ALL: [EastAsianWidth; 7] = [
            EastAsianWidth::Neutral,
            EastAsianWidth::Ambiguous,
            EastAsianWidth::Wide,
            EastAsianWidth::Narrow,
            EastAsianWidth::Halfwidth,
            EastAsianWidth::Fullwidth,
            EastAsianWidth::Zero,
        ];
        ALL.iter()
            .copied()
            .find(|w| w.abbr().eq_ignore_ascii_case(s))
            .ok_or(UnknownPropertyValue)
    }
}

/// Base line break class of a raw code point.
///
/// Fails with [`crate::CoreError::InvalidCodePoint`] for surrogates and values
/// above U+10FFFF.
pub fn class_of(code_point: u32) -> Result<LineBreakClass> {
    crate::error::scalar(code_point, 0).map(LineBreakClass::of)
}

/// Base East Asian Width of a raw code point.
pub fn width_of(code_point: u32) -> Result<EastAsianWidth> {
    crate::error::scalar(code_point, 0).map(EastAsianWidth::of)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;

    #[test]
    fn test_discriminants_match_all() {
        for (i, class) in LineBreakClass::ALL.iter().enumerate() {
            assert_eq!(*class as usize, i);
        }
    }

    #[test]
    fn test_abbr_round_trips_through_from_str() {
        for class in LineBreakClass::ALL {
            assert_eq!(class.abbr().parse::<LineBreakClass>(), Ok(class));
        }
        assert_eq!("zwj".parse::<LineBreakClass>(), Ok(LineBreakClass::ZWJ));
        assert!("QQ".parse::<LineBreakClass>().is_err());
        assert_eq!("Na".parse::<EastAsianWidth>(), Ok(EastAsianWidth::Narrow));
    }

    #[test]
    fn test_known_classes() {
        assert_eq!(LineBreakClass::of('a'), LineBreakClass::AL);
        assert_eq!(LineBreakClass::of(' '), LineBreakClass::SP);
        assert_eq!(LineBreakClass::of('\n'), LineBreakClass::LF);
        assert_eq!(LineBreakClass::of('('), LineBreakClass::OP);
        assert_eq!(LineBreakClass::of('\u{3042}'), LineBreakClass::ID);
        assert_eq!(LineBreakClass::of('\u{3041}'), LineBreakClass::CJ);
        assert_eq!(LineBreakClass::of('\u{0E01}'), LineBreakClass::SA);
        assert_eq!(LineBreakClass::of('\u{200D}'), LineBreakClass::ZWJ);
        assert_eq!(LineBreakClass::of('\u{1F1E6}'), LineBreakClass::RI);
    }

    #[test]
    fn test_known_widths() {
        assert_eq!(EastAsianWidth::of('a'), EastAsianWidth::Narrow);
        assert_eq!(EastAsianWidth::of('\u{3042}'), EastAsianWidth::Wide);
        assert_eq!(EastAsianWidth::of('\u{0410}'), EastAsianWidth::Ambiguous);
        assert_eq!(EastAsianWidth::of('\u{FF21}'), EastAsianWidth::Fullwidth);
        assert_eq!(EastAsianWidth::of('\u{FF71}'), EastAsianWidth::Halfwidth);
        assert_eq!(EastAsianWidth::of('\u{0301}'), EastAsianWidth::Zero);
        assert_eq!(EastAsianWidth::of('\u{00AD}'), EastAsianWidth::Ambiguous);
    }

    #[test]
    fn test_columns() {
        assert_eq!(EastAsianWidth::Wide.columns(false), 2);
        assert_eq!(EastAsianWidth::Ambiguous.columns(false), 1);
        assert_eq!(EastAsianWidth::Ambiguous.columns(true), 2);
        assert_eq!(EastAsianWidth::Zero.columns(true), 0);
    }

    #[test]
    fn test_raw_lookup_rejects_non_scalars() {
        assert_eq!(
            class_of(0xD800),
            Err(CoreError::InvalidCodePoint { offset: 0, value: 0xD800 })
        );
        assert!(width_of(0x11_0000).is_err());
        assert_eq!(class_of(0x0041), Ok(LineBreakClass::AL));
        assert_eq!(class_of(0xE0000), Ok(LineBreakClass::XX));
    }
}
