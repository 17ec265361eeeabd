//! End-to-end segmentation scenarios
//!
//! Each test feeds a short input through a `Segmenter` and checks the
//! resulting break events.

use std::sync::Arc;

use textseg_engine::{
    BreakOpportunity, Config, CoreError, EastAsianWidth, EngineConfig, EngineError,
    ExceptionSets, RuleVariant, Segmenter, WordBreaker,
};

use BreakOpportunity::*;

fn default_segmenter() -> Segmenter {
    Segmenter::new(EngineConfig::default()).unwrap()
}

fn opportunities(segmenter: &Segmenter, text: &str) -> Vec<BreakOpportunity> {
    segmenter.segment_str(text).map(|e| e.opportunity).collect()
}

fn allowed_indices(segmenter: &Segmenter, text: &str) -> Vec<usize> {
    segmenter
        .segment_str(text)
        .filter(|e| e.opportunity == Allowed)
        .map(|e| e.index)
        .collect()
}

/// Breaks after the sixth character of a run, if the run is long enough.
struct FixedBreaker {
    available: bool,
}

impl WordBreaker for FixedBreaker {
    fn find_word_boundaries(&self, run: &[char]) -> Vec<usize> {
        if run.len() > 6 {
            vec![6]
        } else {
            Vec::new()
        }
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

const THAI: &str = "\u{0E2A}\u{0E27}\u{0E31}\u{0E2A}\u{0E14}\u{0E35}\u{0E04}\u{0E23}\u{0E31}\u{0E1A}";

fn thai_segmenter(enabled: bool, available: bool) -> Segmenter {
    let config = Config::builder()
        .enable_sea_segmentation(enabled)
        .build()
        .unwrap();
    Segmenter::builder()
        .classification(config)
        .word_breaker(Arc::new(FixedBreaker { available }))
        .build()
        .unwrap()
}

#[test]
fn test_space_separated_words() {
    let segmenter = default_segmenter();
    let events: Vec<_> = segmenter.segment_str("hello world").collect();

    assert_eq!(events.len(), 12);
    assert_eq!(events[0].opportunity, Prohibited);
    assert_eq!(events[11].opportunity, Mandatory);
    // The space itself stays on the first line; the break follows it.
    assert_eq!(events[5].opportunity, Prohibited);
    assert_eq!(allowed_indices(&segmenter, "hello world"), [6]);

    // Numbered by pair: the break sits at offset 5 (after the space), the
    // end of text after offset 10.
    let breaks: Vec<_> = events
        .iter()
        .filter(|e| e.opportunity.is_break())
        .map(|e| e.after())
        .collect();
    assert_eq!(breaks, [Some(5), Some(10)]);
    for event in &events[1..11] {
        if event.after() != Some(5) {
            assert_eq!(event.opportunity, Prohibited);
        }
    }
}

#[test]
fn test_small_kana_is_nonstarter() {
    let segmenter = default_segmenter();
    assert_eq!(
        opportunities(&segmenter, "\u{3042}\u{3041}"),
        [Prohibited, Prohibited, Mandatory]
    );

    let loose = Segmenter::builder()
        .classification(
            Config::builder()
                .rule_variant(RuleVariant::Loose)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    assert_eq!(
        opportunities(&loose, "\u{3042}\u{3041}"),
        [Prohibited, Allowed, Mandatory]
    );
}

#[test]
fn test_ideographs_break_between() {
    let segmenter = default_segmenter();
    assert_eq!(allowed_indices(&segmenter, "\u{6F22}\u{5B57}\u{3067}"), [1, 2]);
    // Ideographic full stop may not start a line.
    assert_eq!(allowed_indices(&segmenter, "\u{6F22}\u{3002}\u{5B57}"), [2]);
}

#[test]
fn test_parenthesised_quotation() {
    let segmenter = default_segmenter();
    let events: Vec<_> = segmenter
        .segment_str("(\u{201C}quoted\u{201D})")
        .collect();
    let last = events.len() - 1;
    for event in &events[1..last] {
        assert_eq!(event.opportunity, Prohibited, "at {}", event.index);
    }
    assert_eq!(events[last].opportunity, Mandatory);
}

#[test]
fn test_quote_direction_across_spaces() {
    let text = "say \u{201C} hi \u{201D} ok";
    let segmenter = default_segmenter();
    assert_eq!(allowed_indices(&segmenter, text), [4, 11]);

    let undirected = Segmenter::builder()
        .classification(
            Config::builder()
                .exceptions(ExceptionSets {
                    quote_direction: false,
                    ..ExceptionSets::default()
                })
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    assert_eq!(allowed_indices(&undirected, text), [4, 6, 9, 11]);
}

#[test]
fn test_thai_with_word_breaker() {
    let segmenter = thai_segmenter(true, true);
    assert!(segmenter.sea_segmentation_active());
    assert_eq!(allowed_indices(&segmenter, THAI), [6]);
}

#[test]
fn test_thai_without_word_breaker() {
    assert!(allowed_indices(&thai_segmenter(false, true), THAI).is_empty());
    assert!(allowed_indices(&thai_segmenter(true, false), THAI).is_empty());

    let no_breaker = Segmenter::builder()
        .classification(
            Config::builder()
                .enable_sea_segmentation(true)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    assert!(!no_breaker.sea_segmentation_active());
    assert!(allowed_indices(&no_breaker, THAI).is_empty());
}

#[test]
fn test_thai_run_edges_follow_pair_rules() {
    let segmenter = thai_segmenter(true, true);
    let text = format!("a {THAI} b");
    // after "a ", inside the run, after the run's space
    assert_eq!(allowed_indices(&segmenter, &text), [2, 8, 13]);
}

#[test]
fn test_ambiguous_cyrillic_width() {
    let c = '\u{0410}';
    assert_eq!(default_segmenter().resolve(c).width, EastAsianWidth::Narrow);

    let wide = Segmenter::builder()
        .classification(Config::east_asian())
        .build()
        .unwrap();
    assert_eq!(wide.resolve(c).width, EastAsianWidth::Wide);
    assert_eq!(wide.columns("\u{0410}\u{0411}"), 4);

    let narrow_override = Segmenter::builder()
        .classification(
            Config::builder()
                .ambiguous_as_wide(true)
                .exceptions(ExceptionSets {
                    narrow_ambiguous_alphabetics: true,
                    ..ExceptionSets::default()
                })
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    assert_eq!(narrow_override.resolve(c).width, EastAsianWidth::Narrow);
    assert_eq!(narrow_override.columns("\u{0410}\u{0411}"), 2);
}

#[test]
fn test_crlf_single_mandatory() {
    let segmenter = default_segmenter();
    let ops = opportunities(&segmenter, "\r\n");
    assert_eq!(ops, [Prohibited, Prohibited, Mandatory]);

    let ops = opportunities(&segmenter, "a\r\nb");
    assert_eq!(ops, [Prohibited, Prohibited, Prohibited, Mandatory, Mandatory]);
}

#[test]
fn test_other_line_terminators() {
    let segmenter = default_segmenter();
    for terminator in ["\n", "\r", "\u{000B}", "\u{000C}", "\u{0085}", "\u{2028}", "\u{2029}"] {
        let text = format!("a{terminator}b");
        assert_eq!(
            opportunities(&segmenter, &text),
            [Prohibited, Prohibited, Mandatory, Mandatory],
            "terminator {terminator:?}"
        );
    }
}

#[test]
fn test_space_runs() {
    let segmenter = default_segmenter();
    assert_eq!(allowed_indices(&segmenter, "a   b"), [4]);
    assert!(allowed_indices(&segmenter, "ab").is_empty());
}

#[test]
fn test_zero_width_space() {
    let segmenter = default_segmenter();
    assert_eq!(allowed_indices(&segmenter, "ab\u{200B}cd"), [3]);
}

#[test]
fn test_word_joiner_and_nbsp() {
    let segmenter = default_segmenter();
    assert_eq!(allowed_indices(&segmenter, "a\u{2060} b"), [3]);
    assert!(allowed_indices(&segmenter, "\u{6F22}\u{2060}\u{5B57}").is_empty());
    assert!(allowed_indices(&segmenter, "a\u{00A0}b").is_empty());
}

#[test]
fn test_numbers_stay_together() {
    let segmenter = default_segmenter();
    assert!(allowed_indices(&segmenter, "$1,234.50").is_empty());
    assert!(allowed_indices(&segmenter, "(12)%").is_empty());
}

#[test]
fn test_break_indent() {
    let indent = Segmenter::builder()
        .classification(Config::builder().break_indent(true).build().unwrap())
        .build()
        .unwrap();
    assert_eq!(allowed_indices(&indent, "  ab"), [2]);
    assert!(allowed_indices(&default_segmenter(), "  ab").is_empty());
}

#[test]
fn test_code_points_and_utf16_match_str() {
    let segmenter = default_segmenter();
    let text = "I \u{2764}\u{FE0F} \u{6771}\u{4EAC}\u{1F5FC}!";
    let from_str: Vec<_> = segmenter.segment_str(text).collect();

    let cps: Vec<u32> = text.chars().map(u32::from).collect();
    let from_cps: Vec<_> = segmenter.segment_code_points(&cps).unwrap().collect();
    assert_eq!(from_cps, from_str);

    let units: Vec<u16> = text.encode_utf16().collect();
    let from_utf16: Vec<_> = segmenter.segment_utf16(&units).unwrap().collect();
    assert_eq!(from_utf16, from_str);
}

#[test]
fn test_invalid_input_fails_before_any_event() {
    let segmenter = default_segmenter();
    match segmenter.segment_code_points(&[0x61, 0x62, 0xD800, 0x63]) {
        Err(EngineError::Core(CoreError::InvalidCodePoint { offset, value })) => {
            assert_eq!(offset, 2);
            assert_eq!(value, 0xD800);
        }
        other => panic!("expected invalid code point, got {other:?}"),
    }
    match segmenter.segment_utf16(&[0x61, 0xDC00]) {
        Err(EngineError::Core(CoreError::InvalidCodePoint { offset, value })) => {
            assert_eq!(offset, 1);
            assert_eq!(value, 0xDC00);
        }
        other => panic!("expected unpaired surrogate, got {other:?}"),
    }
}

#[test]
fn test_unsupported_unicode_version() {
    let config = EngineConfig::new(Config::default());
    assert!(Segmenter::new(config).is_ok());

    let result = Config::builder().unicode_version("13.0.0").build();
    assert!(matches!(
        result,
        Err(CoreError::UnsupportedUnicodeVersion { .. })
    ));

    let config = EngineConfig::from_toml_str("[classification]\nunicode_version = \"15.0\"");
    assert!(matches!(
        config,
        Err(EngineError::Core(CoreError::UnsupportedUnicodeVersion { .. }))
    ));
}

#[test]
fn test_runs() {
    let segmenter = default_segmenter();
    assert_eq!(
        segmenter.runs("The (quick) brown\nfox."),
        ["The ", "(quick) ", "brown\n", "fox."]
    );
    assert_eq!(
        segmenter.runs("\u{6F22}\u{5B57}\u{3002}"),
        ["\u{6F22}", "\u{5B57}\u{3002}"]
    );
}

#[test]
fn test_segment_batch() {
    let segmenter = default_segmenter();
    let texts = ["a b", "", "\u{6F22}\u{5B57}"];
    let batch = segmenter.segment_batch(&texts).unwrap();
    assert_eq!(batch.len(), 3);
    for (text, events) in texts.iter().zip(&batch) {
        let expected: Vec<_> = segmenter.segment_str(text).collect();
        assert_eq!(events, &expected);
    }
}
