//! Result assembly module
//!
//! Stitches per-chunk events from parallel processing back into the event
//! stream a single pass over the whole text would have produced.

use crate::segmenter::BreakEvent;

/// Events of one chunk together with the chunk's position
#[derive(Debug, Clone)]
pub struct ChunkEvents {
    /// Events segmented with text edges, relative to the chunk
    pub events: Vec<BreakEvent>,
    /// Code point offset of the chunk
    pub char_start: usize,
    /// Byte offset of the chunk
    pub byte_start: usize,
}

/// Assembler for combining partial results
#[derive(Debug, Default)]
pub struct ResultAssembler;

impl ResultAssembler {
    /// Create a new result assembler
    pub fn new() -> Self {
        Self
    }

    /// Assemble events with proper offset adjustment.
    ///
    /// Chunks must be in text order and cut at mandatory breaks. The
    /// end-of-text event of one chunk already stands for the mandatory break
    /// before the next, so every start-of-text event but the first is dropped.
    pub fn assemble_with_offsets(&self, chunks: Vec<ChunkEvents>, emit_edges: bool) -> Vec<BreakEvent> {
        let capacity = chunks.iter().map(|c| c.events.len()).sum();
        let mut result: Vec<BreakEvent> = Vec::with_capacity(capacity);

        for (i, chunk) in chunks.into_iter().enumerate() {
            let skip = usize::from(i > 0);
            result.extend(chunk.events.into_iter().skip(skip).map(|event| {
                BreakEvent::new(
                    event.index + chunk.char_start,
                    event.byte_offset + chunk.byte_start,
                    event.opportunity,
                )
            }));
        }

        if !emit_edges && !result.is_empty() {
            result.pop();
            if !result.is_empty() {
                result.remove(0);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textseg_core::BreakOpportunity::*;

    #[test]
    fn test_assemble_with_offsets() {
        let assembler = ResultAssembler::new();

        // "a\n" and "b"
        let chunks = vec![
            ChunkEvents {
                events: vec![
                    BreakEvent::new(0, 0, Prohibited),
                    BreakEvent::new(1, 1, Prohibited),
                    BreakEvent::new(2, 2, Mandatory),
                ],
                char_start: 0,
                byte_start: 0,
            },
            ChunkEvents {
                events: vec![BreakEvent::new(0, 0, Prohibited), BreakEvent::new(1, 1, Mandatory)],
                char_start: 2,
                byte_start: 2,
            },
        ];

        let result = assembler.assemble_with_offsets(chunks.clone(), true);
        assert_eq!(result.len(), 4);
        assert_eq!(result[2], BreakEvent::new(2, 2, Mandatory));
        assert_eq!(result[3], BreakEvent::new(3, 3, Mandatory));

        let inner = assembler.assemble_with_offsets(chunks, false);
        assert_eq!(
            inner,
            [BreakEvent::new(1, 1, Prohibited), BreakEvent::new(2, 2, Mandatory)]
        );
    }
}
