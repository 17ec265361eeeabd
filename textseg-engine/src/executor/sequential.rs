//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMode, Executor},
    segmenter::{BreakEvent, Segmenter},
};

/// Sequential single-threaded executor
#[derive(Debug, Clone)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn process(&self, segmenter: &Segmenter, text: &str) -> Result<Vec<BreakEvent>> {
        Ok(segmenter.segment_str(text).collect())
    }

    fn process_batch(&self, segmenter: &Segmenter, texts: &[&str]) -> Result<Vec<Vec<BreakEvent>>> {
        Ok(texts
            .iter()
            .map(|text| segmenter.segment_str(text).collect())
            .collect())
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
