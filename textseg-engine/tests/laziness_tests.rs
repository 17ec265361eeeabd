//! Segments must only pull as much input as the consumed events need

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use textseg_engine::{BreakOpportunity, Config, EngineConfig, Segmenter, WordBreaker};

/// Character source that counts how often it is pulled.
struct Counted<I> {
    inner: I,
    pulls: Rc<Cell<usize>>,
}

impl<I: Iterator<Item = char>> Iterator for Counted<I> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.pulls.set(self.pulls.get() + 1);
        self.inner.next()
    }
}

fn counted<I: Iterator<Item = char>>(inner: I) -> (Counted<I>, Rc<Cell<usize>>) {
    let pulls = Rc::new(Cell::new(0));
    (
        Counted {
            inner,
            pulls: Rc::clone(&pulls),
        },
        pulls,
    )
}

struct Halves;

impl WordBreaker for Halves {
    fn find_word_boundaries(&self, run: &[char]) -> Vec<usize> {
        vec![run.len() / 2]
    }
}

const THAI: &str = "\u{0E2A}\u{0E27}\u{0E31}\u{0E2A}\u{0E14}\u{0E35}\u{0E04}\u{0E23}\u{0E31}\u{0E1A}";

#[test]
fn test_early_stop_on_endless_input() {
    let segmenter = Segmenter::new(EngineConfig::default()).unwrap();
    for k in [1, 5, 40] {
        let (source, pulls) = counted("lorem ipsum ".chars().cycle());
        let taken = segmenter.segment_chars(source).take(k).count();
        assert_eq!(taken, k);
        assert!(pulls.get() <= k + 1, "{} pulls for {k} events", pulls.get());
    }
}

#[test]
fn test_no_read_past_consumed_events() {
    let segmenter = Segmenter::new(EngineConfig::default()).unwrap();
    let source = "abc def"
        .chars()
        .chain(std::iter::from_fn(|| -> Option<char> { panic!("input read too far") }));
    let events: Vec<_> = segmenter.segment_chars(source).take(4).collect();
    assert_eq!(events.len(), 4);
    assert_eq!(events[3].index, 3);
}

#[test]
fn test_complex_context_look_ahead_is_one_run() {
    let segmenter = Segmenter::builder()
        .classification(
            Config::builder()
                .enable_sea_segmentation(true)
                .build()
                .unwrap(),
        )
        .word_breaker(Arc::new(Halves))
        .build()
        .unwrap();
    let run_len = THAI.chars().count();

    let (source, pulls) = counted(THAI.chars().chain(std::iter::repeat('a')));
    let mut events = segmenter.segment_chars(source);
    assert!(events.next().is_some());
    // The whole run plus the code point that ends it.
    assert!(pulls.get() <= run_len + 1, "{} pulls", pulls.get());

    let rest: Vec<_> = events.by_ref().take(run_len).collect();
    assert_eq!(rest.len(), run_len);
    assert!(pulls.get() <= run_len + 2, "{} pulls", pulls.get());
    assert_eq!(rest[run_len / 2 - 1].index, run_len / 2);
    assert_eq!(rest[run_len / 2 - 1].opportunity, BreakOpportunity::Allowed);
}
