//! Lazy line break segmentation
//!
//! A [`Segmenter`] owns the immutable policy; each call produces a
//! [`Segments`] iterator with its own [`RunContext`], so one segmenter can
//! serve any number of threads.

use std::iter::Peekable;
use std::str::Chars;
use std::sync::Arc;
use std::vec;

use log::{debug, trace};
use smallvec::SmallVec;
use textseg_core::{
    BreakOpportunity, LineBreakClass, Resolved, Resolver, RunContext, WordBreaker,
};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::executor::{self, ExecutionMode};
use crate::input;

/// One break decision.
///
/// The position is *before* the code point at `index` (equivalently, after
/// `index - 1`). `byte_offset` is the same position in the UTF-8 encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BreakEvent {
    /// Code point offset
    pub index: usize,
    /// UTF-8 byte offset
    pub byte_offset: usize,
    /// What may happen here; never [`BreakOpportunity::Indirect`]
    pub opportunity: BreakOpportunity,
}

impl BreakEvent {
    /// Create a new event
    pub fn new(index: usize, byte_offset: usize, opportunity: BreakOpportunity) -> Self {
        Self {
            index,
            byte_offset,
            opportunity,
        }
    }

    /// Offset of the code point this position follows.
    ///
    /// This numbers each adjacent pair by its left code point: the break in
    /// "hello world" is after offset 5. `None` at the start of text.
    pub fn after(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }
}

/// Line break segmenter
pub struct Segmenter {
    config: EngineConfig,
    word_breaker: Option<Arc<dyn WordBreaker>>,
}

impl std::fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segmenter")
            .field("config", &self.config)
            .field("word_breaker", &self.word_breaker.as_ref().map(|_| "<dyn WordBreaker>"))
            .finish()
    }
}

impl Segmenter {
    /// Create a segmenter, validating the configuration.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            "segmenter: unicode {}, variant {:?}, ambiguous_as_wide={}, sea_segmentation={}, edges={}",
            textseg_core::UNICODE_VERSION,
            config.classification.rule_variant(),
            config.classification.ambiguous_as_wide(),
            config.classification.enable_sea_segmentation(),
            config.emit_text_edges,
        );
        Ok(Self {
            config,
            word_breaker: None,
        })
    }

    /// Create a builder
    pub fn builder() -> SegmenterBuilder {
        SegmenterBuilder::new()
    }

    /// Attach a word breaker for complex-context runs.
    pub fn with_word_breaker(mut self, breaker: Arc<dyn WordBreaker>) -> Self {
        debug!(
            "segmenter: word breaker attached (available={}, enabled={})",
            breaker.is_available(),
            self.config.classification.enable_sea_segmentation()
        );
        self.word_breaker = Some(breaker);
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether complex-context runs are actually delegated.
    pub fn sea_segmentation_active(&self) -> bool {
        self.active_word_breaker().is_some()
    }

    fn active_word_breaker(&self) -> Option<&dyn WordBreaker> {
        if !self.config.classification.enable_sea_segmentation() {
            return None;
        }
        self.word_breaker
            .as_deref()
            .filter(|breaker| breaker.is_available())
    }

    /// Resolved properties of one character under this configuration.
    pub fn resolve(&self, c: char) -> Resolved {
        Resolver::new(&self.config.classification).resolve_char(c)
    }

    /// Segment a string.
    pub fn segment_str<'a>(&'a self, text: &'a str) -> Segments<'a, Chars<'a>> {
        self.segments(text.chars(), self.config.emit_text_edges)
    }

    /// Segment raw code points; the whole input is validated first.
    pub fn segment_code_points(
        &self,
        code_points: &[u32],
    ) -> Result<Segments<'_, vec::IntoIter<char>>> {
        let chars = input::decode_code_points(code_points)?;
        Ok(self.segments(chars.into_iter(), self.config.emit_text_edges))
    }

    /// Segment UTF-16 code units; the whole input is validated first.
    pub fn segment_utf16(&self, units: &[u16]) -> Result<Segments<'_, vec::IntoIter<char>>> {
        let chars = input::decode_utf16(units)?;
        Ok(self.segments(chars.into_iter(), self.config.emit_text_edges))
    }

    /// Segment any source of characters.
    ///
    /// The source is pulled only as far as the events consumed so far
    /// require, plus one code point of look-ahead (a whole complex-context
    /// run when a word breaker is active).
    pub fn segment_chars<I: Iterator<Item = char>>(&self, chars: I) -> Segments<'_, I> {
        self.segments(chars, self.config.emit_text_edges)
    }

    pub(crate) fn segments<I: Iterator<Item = char>>(
        &self,
        chars: I,
        emit_edges: bool,
    ) -> Segments<'_, I> {
        Segments {
            chars: chars.peekable(),
            resolver: Resolver::new(&self.config.classification),
            ctx: RunContext::new(&self.config.classification),
            word_breaker: self.active_word_breaker(),
            emit_edges,
            index: 0,
            byte_offset: 0,
            pending: SmallVec::new(),
            finished: false,
        }
    }

    /// Collect all events for `text`, splitting large inputs across threads
    /// according to the execution mode.
    pub fn events(&self, text: &str) -> Result<Vec<BreakEvent>> {
        let mode = match self.config.execution_mode {
            ExecutionMode::Adaptive => executor::auto_select(text.len(), self.config.parallel_threshold),
            mode => mode,
        };
        executor::for_mode(mode, &self.config)?.process(self, text)
    }

    /// Segment many texts, in parallel when enabled.
    pub fn segment_batch(&self, texts: &[&str]) -> Result<Vec<Vec<BreakEvent>>> {
        let total: usize = texts.iter().map(|t| t.len()).sum();
        let mode = match self.config.execution_mode {
            ExecutionMode::Adaptive if texts.len() > 1 => {
                executor::auto_select(total, self.config.parallel_threshold)
            }
            ExecutionMode::Adaptive => ExecutionMode::Sequential,
            mode => mode,
        };
        trace!("batch of {} texts ({} bytes) dispatched {:?}", texts.len(), total, mode);
        executor::for_mode(mode, &self.config)?.process_batch(self, texts)
    }

    /// Split `text` at every Allowed or Mandatory position.
    ///
    /// Concatenating the runs gives back `text`.
    pub fn runs<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut runs = Vec::new();
        let mut start = 0;
        for event in self.segments(text.chars(), false) {
            if event.opportunity.is_break() {
                runs.push(&text[start..event.byte_offset]);
                start = event.byte_offset;
            }
        }
        if start < text.len() {
            runs.push(&text[start..]);
        }
        runs
    }

    /// Display columns of `text` under this configuration (UAX #11).
    pub fn columns(&self, text: &str) -> usize {
        let resolver = Resolver::new(&self.config.classification);
        let wide = self.config.classification.ambiguous_as_wide();
        text.chars()
            .map(|c| resolver.resolve_char(c).width.columns(wide))
            .sum()
    }
}

/// Builder for [`Segmenter`]
///
/// Provides a fluent interface for configuring the segmenter.
#[derive(Default)]
pub struct SegmenterBuilder {
    config: EngineConfig,
    word_breaker: Option<Arc<dyn WordBreaker>>,
}

impl SegmenterBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole engine configuration
    pub fn engine_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the classification policy
    pub fn classification(mut self, config: textseg_core::Config) -> Self {
        self.config.classification = config;
        self
    }

    /// Emit start-of-text and end-of-text events
    pub fn emit_text_edges(mut self, on: bool) -> Self {
        self.config.emit_text_edges = on;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Attach a word breaker
    pub fn word_breaker(mut self, breaker: Arc<dyn WordBreaker>) -> Self {
        self.word_breaker = Some(breaker);
        self
    }

    /// Build the segmenter
    pub fn build(self) -> Result<Segmenter> {
        let segmenter = Segmenter::new(self.config)?;
        Ok(match self.word_breaker {
            Some(breaker) => segmenter.with_word_breaker(breaker),
            None => segmenter,
        })
    }
}

/// Lazy iterator of [`BreakEvent`]s over one input.
pub struct Segments<'a, I: Iterator<Item = char>> {
    chars: Peekable<I>,
    resolver: Resolver<'a>,
    ctx: RunContext,
    word_breaker: Option<&'a dyn WordBreaker>,
    emit_edges: bool,
    index: usize,
    byte_offset: usize,
    // Events of a delegated run, stored in reverse
    pending: SmallVec<[BreakEvent; 16]>,
    finished: bool,
}

impl<I: Iterator<Item = char>> std::fmt::Debug for Segments<'_, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segments")
            .field("resolver", &self.resolver)
            .field("ctx", &self.ctx)
            .field("word_breaker", &self.word_breaker.map(|_| "<dyn WordBreaker>"))
            .field("emit_edges", &self.emit_edges)
            .field("index", &self.index)
            .field("byte_offset", &self.byte_offset)
            .field("pending", &self.pending)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl<'a, I: Iterator<Item = char>> Segments<'a, I> {
    fn emit(&mut self, c: char, opportunity: BreakOpportunity) -> BreakEvent {
        let event = BreakEvent::new(self.index, self.byte_offset, opportunity);
        self.index += 1;
        self.byte_offset += c.len_utf8();
        event
    }

    /// Consume a maximal complex-context run starting with `first`.
    fn delegate_run(&mut self, breaker: &dyn WordBreaker, first: char, resolved: Resolved) {
        let resolver = self.resolver;
        let mut run: SmallVec<[(char, Resolved); 32]> = SmallVec::new();
        run.push((first, resolved));
        while let Some(c) = self
            .chars
            .next_if(|&c| resolver.resolve_char(c).class == LineBreakClass::SA)
        {
            run.push((c, resolver.resolve_char(c)));
        }

        let text: Vec<char> = run.iter().map(|(c, _)| *c).collect();
        let mut allowed = vec![false; text.len()];
        for pos in breaker.find_word_boundaries(&text) {
            if pos > 0 && pos < text.len() {
                allowed[pos] = true;
            }
        }
        trace!(
            "complex-context run of {} chars at {}: {} breaks",
            text.len(),
            self.index,
            allowed.iter().filter(|a| **a).count()
        );

        let mut events: SmallVec<[BreakEvent; 16]> = SmallVec::with_capacity(run.len());
        for (i, (c, resolved)) in run.iter().enumerate() {
            let computed = self.ctx.step(resolved);
            let opportunity = match (i, allowed[i]) {
                (0, _) => computed,
                (_, true) => BreakOpportunity::Allowed,
                (_, false) => BreakOpportunity::Prohibited,
            };
            let event = self.emit(*c, opportunity);
            if self.emit_edges || event.index > 0 {
                events.push(event);
            }
        }
        events.reverse();
        self.pending = events;
    }
}

impl<'a, I: Iterator<Item = char>> Iterator for Segments<'a, I> {
    type Item = BreakEvent;

    fn next(&mut self) -> Option<BreakEvent> {
        loop {
            if let Some(event) = self.pending.pop() {
                return Some(event);
            }
            if self.finished {
                return None;
            }
            let Some(c) = self.chars.next() else {
                self.finished = true;
                return self.emit_edges.then(|| {
                    BreakEvent::new(self.index, self.byte_offset, BreakOpportunity::Mandatory)
                });
            };

            let resolved = self.resolver.resolve_char(c);
            if resolved.class == LineBreakClass::SA {
                if let Some(breaker) = self.word_breaker {
                    self.delegate_run(breaker, c, resolved);
                    continue;
                }
            }

            let opportunity = self.ctx.step(&resolved);
            let event = self.emit(c, opportunity);
            if self.emit_edges || event.index > 0 {
                return Some(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textseg_core::Config;
    use BreakOpportunity::*;

    struct EveryOther;

    impl WordBreaker for EveryOther {
        fn find_word_boundaries(&self, run: &[char]) -> Vec<usize> {
            (2..run.len()).step_by(2).collect()
        }
    }

    fn opportunities(segmenter: &Segmenter, text: &str) -> Vec<BreakOpportunity> {
        segmenter.segment_str(text).map(|e| e.opportunity).collect()
    }

    #[test]
    fn test_event_count_with_edges() {
        let segmenter = Segmenter::new(EngineConfig::default()).unwrap();
        assert_eq!(segmenter.segment_str("").count(), 1);
        assert_eq!(segmenter.segment_str("a").count(), 2);
        assert_eq!(segmenter.segment_str("hello").count(), 6);
        assert_eq!(opportunities(&segmenter, ""), [Mandatory]);
    }

    #[test]
    fn test_event_count_without_edges() {
        let segmenter = Segmenter::builder().emit_text_edges(false).build().unwrap();
        assert_eq!(segmenter.segment_str("").count(), 0);
        assert_eq!(segmenter.segment_str("a").count(), 0);
        assert_eq!(segmenter.segment_str("hello").count(), 4);
        let first = segmenter.segment_str("ab").next().unwrap();
        assert_eq!(first.index, 1);
    }

    #[test]
    fn test_byte_offsets() {
        let segmenter = Segmenter::new(EngineConfig::default()).unwrap();
        let events: Vec<_> = segmenter.segment_str("a\u{3042}b").collect();
        let offsets: Vec<_> = events.iter().map(|e| e.byte_offset).collect();
        assert_eq!(offsets, [0, 1, 4, 5]);
        let indices: Vec<_> = events.iter().map(|e| e.index).collect();
        assert_eq!(indices, [0, 1, 2, 3]);
    }

    #[test]
    fn test_pair_numbering() {
        let segmenter = Segmenter::new(EngineConfig::default()).unwrap();
        let after: Vec<_> = segmenter.segment_str("ab").map(|e| e.after()).collect();
        assert_eq!(after, [None, Some(0), Some(1)]);
    }

    #[test]
    fn test_word_breaker_gated_by_config() {
        let thai = "\u{0E01}\u{0E02}\u{0E03}\u{0E04}";
        let enabled = Segmenter::builder()
            .classification(Config::builder().enable_sea_segmentation(true).build().unwrap())
            .word_breaker(Arc::new(EveryOther))
            .build()
            .unwrap();
        assert!(enabled.sea_segmentation_active());
        assert_eq!(
            opportunities(&enabled, thai),
            [Prohibited, Prohibited, Allowed, Prohibited, Mandatory]
        );

        let disabled = Segmenter::builder()
            .word_breaker(Arc::new(EveryOther))
            .build()
            .unwrap();
        assert!(!disabled.sea_segmentation_active());
        assert_eq!(
            opportunities(&disabled, thai),
            [Prohibited, Prohibited, Prohibited, Prohibited, Mandatory]
        );
    }

    #[test]
    fn test_runs_and_columns() {
        let segmenter = Segmenter::new(EngineConfig::default()).unwrap();
        assert_eq!(segmenter.runs("hello world"), ["hello ", "world"]);
        assert_eq!(segmenter.runs("a\nb"), ["a\n", "b"]);
        assert!(segmenter.runs("").is_empty());
        assert_eq!(segmenter.columns("a\u{3042}"), 3);
        assert_eq!(segmenter.columns("e\u{0301}"), 1);
    }
}
