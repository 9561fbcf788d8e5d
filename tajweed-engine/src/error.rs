//! Layered error types

use tajweed_core::{CoreError, RuleError};
use thiserror::Error;

/// Corpus loading errors
///
/// These are recoverable: callers that want a best-effort run use
/// [`crate::Corpus::load_lenient`], which turns them into diagnostics.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The corpus file could not be read
    #[error("failed to read corpus {path}: {source}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The corpus is not valid JSON
    #[error("invalid JSON in corpus: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON, but no known sura/aya layout
    #[error("unrecognized corpus structure: {0}")]
    UnrecognizedSchema(String),
}

/// Engine-level errors (application layer)
#[derive(Error, Debug)]
pub enum EngineError {
    /// A rule plugin failed; always fatal
    #[error("rule '{rule}' failed in sura {sura}, aya {aya} ({source_type}): {source}")]
    Rule {
        /// Rule name
        rule: String,
        /// Sura of the failing segment
        sura: u32,
        /// Aya of the failing segment
        aya: u32,
        /// `text` or `bismillah`
        source_type: String,
        /// The plugin's error
        #[source]
        source: RuleError,
    },

    /// Core error outside of rule checking
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Corpus could not be loaded
    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),

    /// Thread pool could not be built
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ThreadPool(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_error_carries_provenance() {
        let error = EngineError::Rule {
            rule: "qalqalah".to_string(),
            sura: 112,
            aya: 1,
            source_type: "text".to_string(),
            source: RuleError::IndexOutOfRange { index: 9, len: 3 },
        };
        assert_eq!(
            error.to_string(),
            "rule 'qalqalah' failed in sura 112, aya 1 (text): complex index 9 out of range for 3 complexes"
        );
    }

    #[test]
    fn test_schema_error_display() {
        let error = CorpusError::UnrecognizedSchema("top-level string".to_string());
        assert_eq!(
            error.to_string(),
            "unrecognized corpus structure: top-level string"
        );
    }
}
