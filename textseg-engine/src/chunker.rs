//! Splitting text at mandatory breaks
//!
//! After a mandatory break the pairing state starts over, so pieces cut
//! there can be segmented independently and stitched back together without
//! changing a single decision.

use textseg_core::{LineBreakClass, Resolver};

/// A chunk of text with its position in the original
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChunk<'a> {
    /// The text content
    pub text: &'a str,
    /// Byte offset in original text
    pub start: usize,
    /// Code point offset in original text
    pub char_start: usize,
}

/// Groups whole lines into chunks of roughly `target_bytes`
#[derive(Debug, Clone)]
pub struct LineChunker {
    target_bytes: usize,
}

impl LineChunker {
    /// Create a new chunker
    pub fn new(target_bytes: usize) -> Self {
        Self {
            target_bytes: target_bytes.max(1),
        }
    }

    /// Cut `text` after mandatory breaks once a chunk reaches the target size.
    ///
    /// Classes are resolved with the same policy the segmenter uses, so
    /// tailored line terminators are honoured. Text without any mandatory
    /// break comes back as a single chunk.
    pub fn chunk<'a>(&self, text: &'a str, resolver: &Resolver<'_>) -> Vec<TextChunk<'a>> {
        let mut chunks = Vec::new();
        let mut start = 0;
        let mut char_start = 0;
        let mut chars_seen = 0;
        let mut iter = text.char_indices().peekable();

        while let Some((offset, c)) = iter.next() {
            chars_seen += 1;
            let end = offset + c.len_utf8();
            if end - start < self.target_bytes {
                continue;
            }
            let class = resolver.resolve_char(c).class;
            let hard = match class {
                LineBreakClass::BK | LineBreakClass::LF | LineBreakClass::NL => true,
                LineBreakClass::CR => !matches!(
                    iter.peek(),
                    Some(&(_, next)) if resolver.resolve_char(next).class == LineBreakClass::LF
                ),
                _ => false,
            };
            if hard && end < text.len() {
                chunks.push(TextChunk {
                    text: &text[start..end],
                    start,
                    char_start,
                });
                start = end;
                char_start = chars_seen;
            }
        }
        if start < text.len() {
            chunks.push(TextChunk {
                text: &text[start..],
                start,
                char_start,
            });
        }
        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textseg_core::Config;

    #[test]
    fn test_cuts_after_line_feeds() {
        let config = Config::default();
        let resolver = Resolver::new(&config);
        let chunks = LineChunker::new(1).chunk("ab\ncd\nef", &resolver);
        let texts: Vec<_> = chunks.iter().map(|c| c.text).collect();
        assert_eq!(texts, ["ab\n", "cd\n", "ef"]);
        assert_eq!(chunks[1].start, 3);
        assert_eq!(chunks[1].char_start, 3);
        assert_eq!(chunks[2].start, 6);
    }

    #[test]
    fn test_never_splits_crlf() {
        let config = Config::default();
        let resolver = Resolver::new(&config);
        let chunks = LineChunker::new(1).chunk("a\r\nb\rc", &resolver);
        let texts: Vec<_> = chunks.iter().map(|c| c.text).collect();
        assert_eq!(texts, ["a\r\n", "b\r", "c"]);
    }

    #[test]
    fn test_target_size_groups_lines() {
        let config = Config::default();
        let resolver = Resolver::new(&config);
        let chunks = LineChunker::new(5).chunk("a\nb\nc\nd\n", &resolver);
        let texts: Vec<_> = chunks.iter().map(|c| c.text).collect();
        assert_eq!(texts, ["a\nb\nc\n", "d\n"]);
    }

    #[test]
    fn test_no_breaks_single_chunk() {
        let config = Config::default();
        let resolver = Resolver::new(&config);
        let chunks = LineChunker::new(1).chunk("\u{3042}\u{3044}", &resolver);
        assert_eq!(chunks.len(), 1);
        assert!(LineChunker::new(1).chunk("", &resolver).is_empty());
    }

    #[test]
    fn test_multibyte_char_offsets() {
        let config = Config::default();
        let resolver = Resolver::new(&config);
        let chunks = LineChunker::new(1).chunk("\u{3042}\nb", &resolver);
        assert_eq!(chunks[1].start, 4);
        assert_eq!(chunks[1].char_start, 2);
    }
}
