//! Pairing state carried between adjacent code points

use crate::class::{EastAsianWidth, LineBreakClass};
use crate::config::Config;
use crate::pair::BreakPairMatrix;
use crate::resolver::{QuoteDirection, Resolved};
use crate::types::BreakOpportunity;

/// State of the pairing walk over one input.
///
/// Owned by a single segmentation call and never shared. The "base" is the
/// last class that is neither a space nor an attached combining mark; it is
/// what the next class pairs against across any run of spaces.
#[derive(Debug, Clone)]
pub struct RunContext {
    base: Option<LineBreakClass>,
    base_quote: Option<QuoteDirection>,
    prev: Option<LineBreakClass>,
    spaces: usize,
    ri_count: usize,
    hebrew_hyphen: bool,
    base_wide: bool,
    base_pictographic: bool,
    next_wide: bool,
    legacy_cm: bool,
    break_indent: bool,
}

impl RunContext {
    /// Fresh state at the start of text.
    pub fn new(config: &Config) -> Self {
        Self {
            base: None,
            base_quote: None,
            prev: None,
            spaces: 0,
            ri_count: 0,
            hebrew_hyphen: false,
            base_wide: false,
            base_pictographic: false,
            next_wide: false,
            legacy_cm: config.legacy_cm(),
            break_indent: config.break_indent(),
        }
    }

    /// Return to the start-of-text state.
    pub fn reset(&mut self) {
        self.base = None;
        self.base_quote = None;
        self.prev = None;
        self.clear_line();
    }

    /// Raw class of the previous code point.
    pub fn prev(&self) -> Option<LineBreakClass> {
        self.prev
    }

    /// Last non-space class on the current line.
    pub fn base(&self) -> Option<LineBreakClass> {
        self.base
    }

    /// Spaces between the base and the current position.
    pub fn spaces(&self) -> usize {
        self.spaces
    }

    /// Length of the regional indicator sequence ending at the base.
    pub fn ri_count(&self) -> usize {
        self.ri_count
    }

    /// Whether the base is a hyphen directly after a Hebrew letter.
    pub fn hebrew_hyphen(&self) -> bool {
        self.hebrew_hyphen
    }

    /// Whether the base is East Asian fullwidth, wide or halfwidth.
    pub fn base_wide(&self) -> bool {
        self.base_wide
    }

    /// Whether the base is an unassigned pictographic code point.
    pub fn base_pictographic(&self) -> bool {
        self.base_pictographic
    }

    /// Whether the code point being paired is East Asian fullwidth, wide or
    /// halfwidth.
    pub fn next_wide(&self) -> bool {
        self.next_wide
    }

    /// Feed the next resolved code point and get the opportunity before it.
    pub fn step(&mut self, cur: &Resolved) -> BreakOpportunity {
        use LineBreakClass::*;

        let class = cur.class.pairing();
        let Some(prev) = self.prev else {
            self.begin(class, cur);
            return BreakOpportunity::Prohibited;
        };

        if prev.is_mandatory() && !(prev == CR && class == LF) {
            self.begin(class, cur);
            return BreakOpportunity::Mandatory;
        }
        if class.is_mandatory() {
            self.prev = Some(class);
            return BreakOpportunity::Prohibited;
        }
        if class == SP {
            self.spaces += 1;
            self.prev = Some(SP);
            return BreakOpportunity::Prohibited;
        }

        let Some(base) = self.base else {
            // Only spaces so far on this line.
            self.begin(class, cur);
            return if self.break_indent {
                BreakOpportunity::Allowed
            } else {
                BreakOpportunity::Prohibited
            };
        };

        let left = match (base, self.base_quote) {
            (QU, Some(QuoteDirection::Opening)) => OP,
            _ => base,
        };
        let right = match (class, cur.quote) {
            (QU, Some(QuoteDirection::Closing)) => CL,
            _ => class,
        };
        self.next_wide = is_wide(cur.width);
        let opportunity = BreakPairMatrix::new().opportunity_between(left, right, self);

        if matches!(class, CM | ZWJ) {
            if self.spaces == 0 && base != ZW {
                self.prev = Some(class);
            } else {
                self.advance(self.isolated_mark(), None);
                self.prev = Some(class);
            }
        } else {
            self.advance(class, Some(cur));
        }
        opportunity
    }

    fn isolated_mark(&self) -> LineBreakClass {
        if self.legacy_cm {
            LineBreakClass::ID
        } else {
            LineBreakClass::AL
        }
    }

    fn clear_line(&mut self) {
        self.spaces = 0;
        self.ri_count = 0;
        self.hebrew_hyphen = false;
        self.base_wide = false;
        self.base_pictographic = false;
    }

    /// Start a new line whose first code point has `class`.
    fn begin(&mut self, class: LineBreakClass, cur: &Resolved) {
        use LineBreakClass::*;

        self.clear_line();
        self.base = None;
        self.base_quote = None;
        self.prev = Some(class);
        match class {
            SP => self.spaces = 1,
            BK | CR | LF | NL => {}
            CM | ZWJ => self.base = Some(self.isolated_mark()),
            _ => {
                self.base = Some(class);
                self.base_quote = cur.quote;
                self.base_wide = is_wide(cur.width);
                self.base_pictographic = cur.unassigned_pictographic;
                if class == RI {
                    self.ri_count = 1;
                }
            }
        }
    }

    /// Make `class` the new base; `cur` is `None` for an isolated mark.
    fn advance(&mut self, class: LineBreakClass, cur: Option<&Resolved>) {
        use LineBreakClass::*;

        let tight = self.spaces == 0;
        self.hebrew_hyphen = tight && self.base == Some(HL) && matches!(class, HY | BA);
        self.ri_count = match class {
            RI if tight && self.base == Some(RI) => self.ri_count + 1,
            RI => 1,
            _ => 0,
        };
        self.base = Some(class);
        self.base_quote = cur.and_then(|r| r.quote);
        self.base_wide = cur.is_some_and(|r| is_wide(r.width));
        self.base_pictographic = cur.is_some_and(|r| r.unassigned_pictographic);
        self.spaces = 0;
        self.prev = Some(class);
    }

    #[cfg(test)]
    pub(crate) fn with_widths(mut self, base_wide: bool, next_wide: bool) -> Self {
        self.base_wide = base_wide;
        self.next_wide = next_wide;
        self
    }

    #[cfg(test)]
    pub(crate) fn primed(prev: Option<LineBreakClass>, spaces: usize) -> Self {
        let mut ctx = Self::new(&Config::default());
        ctx.prev = prev;
        ctx.spaces = spaces;
        ctx
    }
}

fn is_wide(width: EastAsianWidth) -> bool {
    matches!(
        width,
        EastAsianWidth::Wide | EastAsianWidth::Fullwidth | EastAsianWidth::Halfwidth
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Resolver;
    use alloc::vec::Vec;
    use BreakOpportunity::*;

    fn walk(config: &Config, text: &str) -> Vec<BreakOpportunity> {
        let resolver = Resolver::new(config);
        let mut ctx = RunContext::new(config);
        text.chars()
            .map(|c| ctx.step(&resolver.resolve_char(c)))
            .collect()
    }

    #[test]
    fn test_first_position_is_prohibited() {
        assert_eq!(walk(&Config::default(), "a"), [Prohibited]);
        assert_eq!(walk(&Config::default(), " "), [Prohibited]);
    }

    #[test]
    fn test_break_after_spaces() {
        let ops = walk(&Config::default(), "hello world");
        assert_eq!(ops[6], Allowed);
        assert_eq!(ops.iter().filter(|o| **o == Allowed).count(), 1);
    }

    #[test]
    fn test_crlf_is_one_break() {
        let ops = walk(&Config::default(), "a\r\nb");
        assert_eq!(ops, [Prohibited, Prohibited, Prohibited, Mandatory]);
    }

    #[test]
    fn test_leading_spaces() {
        assert_eq!(
            walk(&Config::default(), "  a"),
            [Prohibited, Prohibited, Prohibited]
        );
        let indent = Config::builder().break_indent(true).build().unwrap();
        assert_eq!(walk(&indent, "  a"), [Prohibited, Prohibited, Allowed]);
    }

    #[test]
    fn test_combining_mark_attaches() {
        // "a" + COMBINING ACUTE + "b": the mark inherits "a"
        assert_eq!(
            walk(&Config::default(), "a\u{0301}b"),
            [Prohibited, Prohibited, Prohibited]
        );
        // A mark after a space stands alone as a letter.
        assert_eq!(
            walk(&Config::default(), "a \u{0301}"),
            [Prohibited, Prohibited, Allowed]
        );
    }

    #[test]
    fn test_regional_indicator_pairs() {
        let flags = "\u{1F1EF}\u{1F1F5}\u{1F1FA}\u{1F1F8}";
        assert_eq!(
            walk(&Config::default(), flags),
            [Prohibited, Prohibited, Allowed, Prohibited]
        );
    }

    #[test]
    fn test_zwj_sequence_does_not_break() {
        let ops = walk(&Config::default(), "\u{1F468}\u{200D}\u{1F469}");
        assert_eq!(ops, [Prohibited, Prohibited, Prohibited]);
    }

    #[test]
    fn test_hebrew_hyphen() {
        // HEBREW LETTER ALEF, HYPHEN-MINUS, HEBREW LETTER BET
        let ops = walk(&Config::default(), "\u{05D0}-\u{05D1}");
        assert_eq!(ops, [Prohibited, Prohibited, Prohibited]);
        let ops = walk(&Config::default(), "a-b");
        assert_eq!(ops, [Prohibited, Prohibited, Allowed]);
    }

    #[test]
    fn test_directional_quotes_across_spaces() {
        let text = "x \u{201C} y \u{201D} z";
        let ops = walk(&Config::default(), text);
        // Opening quote keeps the following word; closing quote keeps the preceding one.
        assert_eq!(ops[2], Allowed);
        assert_eq!(ops[4], Prohibited);
        assert_eq!(ops[6], Prohibited);
        assert_eq!(ops[8], Allowed);
    }

    #[test]
    fn test_no_break_before_closing_after_glue() {
        let config = Config::default();
        for text in ["a\u{00A0} )", "a\u{2060} ]", "a\u{2060} !"] {
            assert_eq!(
                walk(&config, text),
                [Prohibited, Prohibited, Prohibited, Prohibited],
                "{text:?}"
            );
        }
    }

    #[test]
    fn test_fullwidth_opening_bracket_after_letter() {
        let config = Config::default();
        assert_eq!(walk(&config, "a\u{FF08}"), [Prohibited, Allowed]);
        assert_eq!(walk(&config, "1\u{FF08}"), [Prohibited, Allowed]);
        assert_eq!(walk(&config, "a("), [Prohibited, Prohibited]);
    }

    #[test]
    fn test_emoji_modifier_after_unassigned_pictograph() {
        let config = Config::default();
        assert_eq!(
            walk(&config, "\u{1FC00}\u{1F3FB}"),
            [Prohibited, Prohibited]
        );
        // An assigned ideograph does not take the modifier.
        assert_eq!(walk(&config, "\u{6F22}\u{1F3FB}"), [Prohibited, Allowed]);
    }

    #[test]
    fn test_reset() {
        let config = Config::default();
        let resolver = Resolver::new(&config);
        let mut ctx = RunContext::new(&config);
        ctx.step(&resolver.resolve_char('a'));
        ctx.reset();
        assert_eq!(ctx.prev(), None);
        assert_eq!(ctx.step(&resolver.resolve_char('b')), Prohibited);
    }
}
