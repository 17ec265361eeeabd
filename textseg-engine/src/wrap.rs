//! Column-width line wrapping
//!
//! Greedy filling over the break events of a [`Segmenter`]: each run
//! between two opportunities is appended to the current line until the
//! next one would not fit, at which point the line is closed with the
//! configured newline sequence.

use log::trace;
use serde::{Deserialize, Serialize};
use textseg_core::{LineBreakClass, Resolver};

use crate::error::{EngineError, Result};
use crate::segmenter::Segmenter;

/// How closed lines are terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineFormat {
    /// Insert the newline at wrap points; keep everything else as is.
    #[default]
    Simple,
    /// Replace every line terminator with the newline, drop spaces before
    /// it, and terminate the last line too.
    Newline,
    /// Like `Simple`, but drop spaces before every line end.
    Trim,
}

/// What to do with a run wider than a whole line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgentBreak {
    /// Cut the run between code points.
    #[default]
    Force,
    /// Leave the run whole, overflowing the line.
    Keep,
    /// Fail with [`EngineError::ExcessiveLine`].
    Error,
}

/// Wrapping options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapOptions {
    /// Maximum columns per line, not counting trailing spaces (0 = unlimited)
    pub width: usize,
    /// A line is not wrapped before it holds this many columns
    pub min_width: usize,
    /// Maximum code points per line, not counting trailing spaces (0 = unlimited)
    pub char_max: usize,
    /// Sequence inserted at wrap points
    pub newline: String,
    /// Line termination style
    pub format: LineFormat,
    /// Handling of runs that cannot fit on any line
    pub urgent: UrgentBreak,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            width: 76,
            min_width: 0,
            char_max: 998,
            newline: "\n".to_string(),
            format: LineFormat::Simple,
            urgent: UrgentBreak::Force,
        }
    }
}

impl WrapOptions {
    /// Default options with the given column limit.
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.width != 0 && self.min_width > self.width {
            return Err(EngineError::Config(format!(
                "min_width {} exceeds width {}",
                self.min_width, self.width
            )));
        }
        Ok(())
    }

    fn fits(&self, columns: usize, chars: usize) -> bool {
        (self.width == 0 || columns <= self.width) && (self.char_max == 0 || chars <= self.char_max)
    }
}

/// Span of text with its display size.
#[derive(Debug, Default, Clone, Copy)]
struct Extent {
    columns: usize,
    chars: usize,
}

impl Extent {
    fn add(self, other: Extent) -> Extent {
        Extent {
            columns: self.columns + other.columns,
            chars: self.chars + other.chars,
        }
    }
}

/// Line under construction.
struct LineFiller<'o> {
    options: &'o WrapOptions,
    lines: Vec<String>,
    line: String,
    used: Extent,
    // Spaces after the last word; only counted once something follows
    spaces: String,
    spaces_extent: Extent,
}

impl<'o> LineFiller<'o> {
    fn new(options: &'o WrapOptions) -> Self {
        Self {
            options,
            lines: Vec::new(),
            line: String::new(),
            used: Extent::default(),
            spaces: String::new(),
            spaces_extent: Extent::default(),
        }
    }

    fn is_empty(&self) -> bool {
        self.line.is_empty() && self.spaces.is_empty()
    }

    /// Close the line with `terminator`.
    fn close(&mut self, terminator: &str) {
        let keep_spaces = match self.options.format {
            LineFormat::Simple => true,
            LineFormat::Newline | LineFormat::Trim => false,
        };
        if keep_spaces {
            self.line.push_str(&self.spaces);
        }
        self.line.push_str(terminator);
        self.lines.push(std::mem::take(&mut self.line));
        self.spaces.clear();
        self.used = Extent::default();
        self.spaces_extent = Extent::default();
    }

    fn append(&mut self, body: &str, extent: Extent) {
        if !body.is_empty() {
            self.line.push_str(&self.spaces);
            self.used = self.used.add(self.spaces_extent).add(extent);
            self.spaces.clear();
            self.spaces_extent = Extent::default();
            self.line.push_str(body);
        }
    }

    fn push_spaces(&mut self, spaces: &str, extent: Extent) {
        self.spaces.push_str(spaces);
        self.spaces_extent = self.spaces_extent.add(extent);
    }

    fn finish(mut self) -> Vec<String> {
        if !self.is_empty() {
            match self.options.format {
                LineFormat::Newline => {
                    let newline = self.options.newline.clone();
                    self.close(&newline);
                }
                LineFormat::Simple | LineFormat::Trim => {
                    self.line.push_str(&self.spaces);
                    self.lines.push(self.line);
                }
            }
        }
        self.lines
    }
}

/// One run between break opportunities, split into its parts.
struct Run<'t> {
    body: &'t str,
    spaces: &'t str,
    terminator: &'t str,
}

impl<'t> Run<'t> {
    fn split(run: &'t str, resolver: &Resolver<'_>) -> Self {
        let class_at = |c: char| resolver.resolve_char(c).class;
        let body_end = run
            .trim_end_matches(|c: char| class_at(c).is_mandatory())
            .len();
        let terminator = &run[body_end..];
        let spaced = &run[..body_end];
        let words_end = spaced
            .trim_end_matches(|c: char| class_at(c) == LineBreakClass::SP)
            .len();
        Run {
            body: &spaced[..words_end],
            spaces: &spaced[words_end..],
            terminator,
        }
    }
}

impl Segmenter {
    /// Wrap `text` into lines of at most `max_columns` display columns,
    /// using the configured wrap options otherwise.
    ///
    /// Each returned line carries its terminator, so with the default
    /// `Simple` format the lines concatenate to `text` plus inserted
    /// newlines.
    pub fn wrap(&self, text: &str, max_columns: usize) -> Result<Vec<String>> {
        let options = WrapOptions {
            width: max_columns,
            ..self.config().wrap.clone()
        };
        self.wrap_with(text, &options)
    }

    /// Wrap `text` with explicit options.
    pub fn wrap_with(&self, text: &str, options: &WrapOptions) -> Result<Vec<String>> {
        options.validate()?;
        let resolver = Resolver::new(&self.config().classification);
        let wide = self.config().classification.ambiguous_as_wide();
        let extent = |s: &str| Extent {
            columns: s.chars().map(|c| resolver.resolve_char(c).width.columns(wide)).sum(),
            chars: s.chars().count(),
        };

        let mut filler = LineFiller::new(options);
        let mut start = 0;
        for run in self.runs(text) {
            let parts = Run::split(run, &resolver);
            let body = extent(parts.body);
            let spaces = extent(parts.spaces);

            let grown = filler.used.add(filler.spaces_extent).add(body);
            if !filler.line.is_empty()
                && !parts.body.is_empty()
                && !options.fits(grown.columns, grown.chars)
                && filler.used.columns >= options.min_width
            {
                filler.close(&options.newline);
            }

            if filler.line.is_empty() && !options.fits(body.columns, body.chars) {
                match options.urgent {
                    UrgentBreak::Force => {
                        force_split(&mut filler, parts.body, &resolver, wide);
                    }
                    UrgentBreak::Keep => filler.append(parts.body, body),
                    UrgentBreak::Error => {
                        return Err(EngineError::ExcessiveLine { byte_offset: start });
                    }
                }
            } else {
                filler.append(parts.body, body);
            }
            filler.push_spaces(parts.spaces, spaces);

            if !parts.terminator.is_empty() {
                match options.format {
                    LineFormat::Newline => filler.close(&options.newline),
                    LineFormat::Simple | LineFormat::Trim => filler.close(parts.terminator),
                }
            }
            start += run.len();
        }
        let lines = filler.finish();
        trace!("wrapped {} bytes into {} lines", text.len(), lines.len());
        Ok(lines)
    }
}

/// Cut an oversized run into pieces that fit; the last piece stays open.
fn force_split(filler: &mut LineFiller<'_>, body: &str, resolver: &Resolver<'_>, wide: bool) {
    let options = filler.options;
    // Leading spaces of the text share the first line
    let mut lead = filler.spaces_extent;
    let mut piece_start = 0;
    let mut piece = Extent::default();
    for (offset, c) in body.char_indices() {
        let columns = resolver.resolve_char(c).width.columns(wide);
        let grown = piece.add(Extent { columns, chars: 1 });
        let line = lead.add(grown);
        // Zero-width code points stay with what they follow.
        if piece.chars > 0 && columns > 0 && !options.fits(line.columns, line.chars) {
            filler.append(&body[piece_start..offset], piece);
            filler.close(&options.newline);
            lead = Extent::default();
            piece_start = offset;
            piece = Extent { columns, chars: 1 };
        } else {
            piece = grown;
        }
    }
    filler.append(&body[piece_start..], piece);
}
