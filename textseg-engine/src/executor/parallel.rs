//! Parallel execution strategy

use rayon::prelude::*;
use textseg_core::Resolver;

use crate::{
    assembler::{ChunkEvents, ResultAssembler},
    chunker::LineChunker,
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
    segmenter::{BreakEvent, Segmenter},
};

/// Parallel multi-threaded executor
#[derive(Debug)]
pub struct ParallelExecutor {
    chunk_target_bytes: usize,
    threads: usize,
    pool: Option<rayon::ThreadPool>,
}

impl ParallelExecutor {
    /// Create a new parallel executor
    ///
    /// With `threads` set, work runs on a dedicated pool of that size;
    /// otherwise on rayon's global pool.
    pub fn new(threads: Option<usize>, chunk_target_bytes: usize) -> Result<Self> {
        let pool = match threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| EngineError::Parallel(e.to_string()))?,
            ),
            None => None,
        };
        Ok(Self {
            chunk_target_bytes,
            threads: threads.unwrap_or_else(num_cpus::get),
            pool,
        })
    }

    fn install<R: Send>(&self, op: impl FnOnce() -> R + Send) -> R {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    /// Chunk at mandatory breaks, segment chunks in parallel, reassemble.
    fn process_parallel(&self, segmenter: &Segmenter, text: &str) -> Vec<BreakEvent> {
        // Phase 1: Chunk the text, aiming for a few chunks per thread
        let resolver = Resolver::new(&segmenter.config().classification);
        let target = self
            .chunk_target_bytes
            .max(text.len() / (self.threads.max(1) * 4));
        let chunks = LineChunker::new(target).chunk(text, &resolver);
        if chunks.len() <= 1 {
            return segmenter.segment_str(text).collect();
        }
        log::trace!("{} bytes split into {} chunks", text.len(), chunks.len());

        // Phase 2: Segment chunks in parallel
        let parts: Vec<ChunkEvents> = self.install(|| {
            chunks
                .par_iter()
                .map(|chunk| ChunkEvents {
                    events: segmenter.segments(chunk.text.chars(), true).collect(),
                    char_start: chunk.char_start,
                    byte_start: chunk.start,
                })
                .collect()
        });

        // Phase 3: Stitch
        ResultAssembler::new().assemble_with_offsets(parts, segmenter.config().emit_text_edges)
    }
}

impl Executor for ParallelExecutor {
    fn process(&self, segmenter: &Segmenter, text: &str) -> Result<Vec<BreakEvent>> {
        Ok(self.process_parallel(segmenter, text))
    }

    fn process_batch(&self, segmenter: &Segmenter, texts: &[&str]) -> Result<Vec<Vec<BreakEvent>>> {
        Ok(self.install(|| {
            texts
                .par_iter()
                .map(|text| segmenter.segment_str(text).collect())
                .collect()
        }))
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
