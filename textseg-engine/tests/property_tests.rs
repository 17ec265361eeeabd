//! Property-based tests for segmentation invariants

use proptest::prelude::*;
use textseg_engine::{
    BreakOpportunity, EngineConfig, ExecutionMode, LineBreakClass, Segmenter,
};

const ALPHABET: &[char] = &[
    'a', 'b', 'Z', '1', '9', ' ', ' ', '\t', '\n', '\r', '(', ')', '[', '"', '\'', '!', '?', ',',
    '.', '-', '/', '%', '$', '\u{00A0}', '\u{200B}', '\u{2060}', '\u{200D}', '\u{0301}',
    '\u{201C}', '\u{201D}', '\u{00AB}', '\u{00BB}', '\u{3042}', '\u{3041}', '\u{30FC}',
    '\u{3001}', '\u{3002}', '\u{300C}', '\u{300D}', '\u{6F22}', '\u{AC00}', '\u{05D0}',
    '\u{1F1EF}', '\u{1F1F5}', '\u{1F466}', '\u{1F3FB}', '\u{0410}', '\u{0E01}',
];

fn text_strategy(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..max_len)
        .prop_map(|chars| chars.into_iter().collect())
}

fn segmenter() -> Segmenter {
    Segmenter::new(EngineConfig::sequential()).unwrap()
}

proptest! {
    #[test]
    fn prop_lookup_is_total(cp in 0u32..=0x10_FFFF) {
        let is_scalar = char::from_u32(cp).is_some();
        prop_assert_eq!(textseg_core::class_of(cp).is_ok(), is_scalar);
        prop_assert_eq!(textseg_core::width_of(cp).is_ok(), is_scalar);
        if let Some(c) = char::from_u32(cp) {
            prop_assert_eq!(textseg_core::class_of(cp).unwrap(), LineBreakClass::of(c));
        }
    }

    #[test]
    fn prop_event_count_and_order(text in text_strategy(64)) {
        let events: Vec<_> = segmenter().segment_str(&text).collect();
        let n = text.chars().count();
        prop_assert_eq!(events.len(), n + 1);
        for (i, event) in events.iter().enumerate() {
            prop_assert_eq!(event.index, i);
            prop_assert_ne!(event.opportunity, BreakOpportunity::Indirect);
        }
        prop_assert_eq!(events[n].opportunity, BreakOpportunity::Mandatory);
        prop_assert_eq!(events[n].byte_offset, text.len());
    }

    #[test]
    fn prop_deterministic(text in text_strategy(64)) {
        let s = segmenter();
        let first: Vec<_> = s.segment_str(&text).collect();
        let second: Vec<_> = s.segment_str(&text).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_runs_round_trip(text in any::<String>()) {
        let runs = segmenter().runs(&text);
        prop_assert_eq!(runs.concat(), text);
    }

    #[test]
    fn prop_runs_are_stable(text in text_strategy(64)) {
        let s = Segmenter::builder()
            .engine_config(EngineConfig::sequential())
            .emit_text_edges(false)
            .build()
            .unwrap();
        for run in s.runs(&text) {
            let breaks: Vec<_> = s
                .segment_str(run)
                .filter(|e| e.opportunity.is_break())
                .collect();
            prop_assert!(breaks.is_empty(), "run {:?} breaks at {:?}", run, breaks);
        }
    }

    #[test]
    fn prop_crlf_never_breaks(prefix in text_strategy(16), suffix in text_strategy(16)) {
        let text = format!("{prefix}\r\n{suffix}");
        let lf_index = prefix.chars().count() + 1;
        let event = segmenter()
            .segment_str(&text)
            .find(|e| e.index == lf_index)
            .unwrap();
        prop_assert_eq!(event.opportunity, BreakOpportunity::Prohibited);
    }

    #[test]
    fn prop_spaces_enable_indirect_breaks(spaces in 0usize..8) {
        let text = format!("a{}b", " ".repeat(spaces));
        let allowed = segmenter()
            .segment_str(&text)
            .filter(|e| e.opportunity == BreakOpportunity::Allowed)
            .count();
        prop_assert_eq!(allowed, usize::from(spaces > 0));
    }

    #[test]
    fn prop_parallel_matches_sequential(lines in prop::collection::vec(text_strategy(24), 0..12)) {
        let text = lines.join("\n");
        let sequential = segmenter().segment_str(&text).collect::<Vec<_>>();

        let mut config = EngineConfig::default();
        config.execution_mode = ExecutionMode::Parallel;
        config.chunk_target_bytes = 1;
        config.threads = Some(2);
        let parallel = Segmenter::new(config).unwrap().events(&text).unwrap();

        prop_assert_eq!(parallel, sequential);
    }
}
