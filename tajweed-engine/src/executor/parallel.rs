//! Parallel execution strategy
//!
//! Segments are independent, so each is analysed on its own. Rayon's indexed
//! `collect` buffers every segment's outcome and returns them in input order,
//! so results from different segments never interleave.

use super::{ExecutionMode, Executor, SegmentFn};
use crate::corpus::Segment;
use crate::engine::SegmentOutcome;
use crate::error::{EngineError, Result};
use rayon::prelude::*;

/// Multi-threaded executor
#[derive(Debug, Default, Clone, Copy)]
pub struct ParallelExecutor {
    /// Worker threads; `None` uses rayon's global pool
    threads: Option<usize>,
}

impl ParallelExecutor {
    pub fn new(threads: Option<usize>) -> Self {
        Self { threads }
    }

    fn run(segments: &[Segment], analyze: &SegmentFn<'_>) -> Result<Vec<SegmentOutcome>> {
        segments.par_iter().map(analyze).collect()
    }
}

impl Executor for ParallelExecutor {
    fn execute(&self, segments: &[Segment], analyze: &SegmentFn<'_>) -> Result<Vec<SegmentOutcome>> {
        match self.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| EngineError::ThreadPool(e.to_string()))?;
                log::debug!("running {} segments on {} threads", segments.len(), threads);
                pool.install(|| Self::run(segments, analyze))
            }
            None => Self::run(segments, analyze),
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
