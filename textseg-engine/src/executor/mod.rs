//! Execution strategies for whole-text and batch segmentation

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::segmenter::{BreakEvent, Segmenter};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Single-threaded sequential processing
    Sequential,
    /// Multi-threaded parallel processing
    Parallel,
    /// Choose by input size
    Adaptive,
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Segment one text and collect every event
    fn process(&self, segmenter: &Segmenter, text: &str) -> Result<Vec<BreakEvent>>;

    /// Segment independent texts
    fn process_batch(&self, segmenter: &Segmenter, texts: &[&str]) -> Result<Vec<Vec<BreakEvent>>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Automatically select execution mode based on text size
pub fn auto_select(text_len: usize, threshold: usize) -> ExecutionMode {
    if text_len < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

/// Executor for a concrete mode.
pub(crate) fn for_mode(mode: ExecutionMode, config: &EngineConfig) -> Result<Box<dyn Executor>> {
    #[cfg(feature = "parallel")]
    if mode == ExecutionMode::Parallel {
        return Ok(Box::new(ParallelExecutor::new(
            config.threads,
            config.chunk_target_bytes,
        )?));
    }
    #[cfg(not(feature = "parallel"))]
    let _ = (mode, config);

    Ok(Box::new(SequentialExecutor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_select() {
        assert_eq!(auto_select(10, 100), ExecutionMode::Sequential);
        #[cfg(feature = "parallel")]
        assert_eq!(auto_select(100, 100), ExecutionMode::Parallel);
        #[cfg(not(feature = "parallel"))]
        assert_eq!(auto_select(100, 100), ExecutionMode::Sequential);
    }
}
