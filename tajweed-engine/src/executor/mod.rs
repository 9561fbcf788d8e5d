//! Execution strategies for running a rule over many segments
//!
//! Every executor returns one outcome per segment, in the order the segments
//! were given, regardless of how the work was scheduled.

use crate::corpus::Segment;
use crate::engine::SegmentOutcome;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Per-segment analysis step handed to an executor
pub type SegmentFn<'a> = dyn Fn(&Segment) -> Result<SegmentOutcome> + Sync + 'a;

/// Execution mode selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Single-threaded, in corpus order
    #[default]
    Sequential,
    /// Segments analysed on a thread pool, results re-assembled in order
    Parallel,
    /// Parallel once the segment count reaches the configured threshold
    Adaptive,
}

impl ExecutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Adaptive => "adaptive",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(ExecutionMode::Sequential),
            "parallel" => Ok(ExecutionMode::Parallel),
            "adaptive" => Ok(ExecutionMode::Adaptive),
            other => Err(format!("unknown execution mode: {other}")),
        }
    }
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Apply `analyze` to every segment; outcomes are in segment order
    ///
    /// The first fatal error aborts the run.
    fn execute(&self, segments: &[Segment], analyze: &SegmentFn<'_>) -> Result<Vec<SegmentOutcome>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Resolve `Adaptive` to a concrete mode for `segment_count` segments
pub fn auto_select(mode: ExecutionMode, segment_count: usize, threshold: usize) -> ExecutionMode {
    match mode {
        ExecutionMode::Adaptive if segment_count >= threshold => {
            #[cfg(feature = "parallel")]
            return ExecutionMode::Parallel;

            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Sequential
        }
        ExecutionMode::Adaptive => ExecutionMode::Sequential,
        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Parallel => ExecutionMode::Sequential,
        other => other,
    }
}
