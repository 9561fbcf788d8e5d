//! Configuration types for the engine

use crate::corpus::BismillahPolicy;
use crate::executor::ExecutionMode;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = rayon default)
    pub threads: Option<usize>,
    /// Minimum segment count before `Adaptive` goes parallel
    pub parallel_threshold: usize,
    /// Aya index given to Bismillah segments when expanding a corpus
    pub bismillah_policy: BismillahPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: None,
            // Roughly a tenth of the Quran's ayas
            parallel_threshold: 600,
            bismillah_policy: BismillahPolicy::SameAya,
        }
    }
}

impl EngineConfig {
    /// Parallel above the default threshold
    pub fn adaptive() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            ..Self::default()
        }
    }

    /// Always parallel
    pub fn parallel(threads: Option<usize>) -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            threads,
            ..Self::default()
        }
    }

    /// Reject settings that cannot run
    pub fn validate(&self) -> Result<(), String> {
        if self.threads == Some(0) {
            return Err("thread count must be at least 1".to_string());
        }
        Ok(())
    }
}
