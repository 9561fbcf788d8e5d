//! Corpus loading and rule orchestration for Tajweed analysis
//!
//! This crate normalizes corpus files into ordered segments, runs a rule
//! plugin over them sequentially or on a thread pool, and assembles the
//! findings with their provenance in corpus order.
//!
//! # Example
//!
//! ```rust
//! use tajweed_engine::{CorpusEntry, Corpus, RuleEngine};
//! use tajweed_core::QalqalahRule;
//!
//! let corpus = Corpus::from_entries(vec![CorpusEntry::new(112, 1, "\u{0642}\u{064E}")]);
//! let engine = RuleEngine::builder().build().unwrap();
//! let output = engine.run_corpus(&corpus, &QalqalahRule::new()).unwrap();
//! assert_eq!(output.instances.len(), 1);
//! assert_eq!(output.instances[0].kind(), "Kubra (Major)");
//! ```

pub mod assembler;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod executor;

// Re-export key types
pub use assembler::{ResultAssembler, RuleInstance};
pub use config::EngineConfig;
pub use corpus::{
    BismillahPolicy, Corpus, CorpusEntry, CorpusSource, JsonCorpusFile, Segment, SourceType,
};
pub use engine::{RuleEngine, RuleEngineBuilder, RunOutput, RunStats, SegmentOutcome, SkippedSegment};
pub use error::{CorpusError, EngineError, Result};
pub use executor::{ExecutionMode, Executor};

// Re-export from core for convenience
pub use tajweed_core::{PauseMarkSet, PausePreset, RuleFinding, RulePlugin};
