//! Sequential execution strategy

use super::{ExecutionMode, Executor, SegmentFn};
use crate::corpus::Segment;
use crate::engine::SegmentOutcome;
use crate::error::Result;

/// Single-threaded executor
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn execute(&self, segments: &[Segment], analyze: &SegmentFn<'_>) -> Result<Vec<SegmentOutcome>> {
        segments.iter().map(analyze).collect()
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
