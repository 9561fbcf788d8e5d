//! Core error types (deterministic only)

use thiserror::Error;

/// Failure inside a rule plugin
///
/// A well-formed complex must never make a rule fail, so any `RuleError`
/// points at a defect in the rule itself and is fatal to a run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The rule reached a state its author considered impossible
    #[error("rule '{rule}' failed at complex {index}: {reason}")]
    Defect {
        /// Rule name
        rule: String,
        /// Index of the complex being checked
        index: usize,
        /// Description of the failure
        reason: String,
    },

    /// The rule was handed an index outside the complex list
    #[error("complex index {index} out of range for {len} complexes")]
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Length of the complex list
        len: usize,
    },
}

/// Core algorithm errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A rule plugin failed
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// Unknown rule name requested from the registry
    #[error("unknown rule: {0}")]
    UnknownRule(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_error_display() {
        let error = RuleError::Defect {
            rule: "qalqalah".to_string(),
            index: 4,
            reason: "empty letter".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "rule 'qalqalah' failed at complex 4: empty letter"
        );
    }

    #[test]
    fn test_core_error_is_transparent_over_rule_error() {
        let error: CoreError = RuleError::IndexOutOfRange { index: 3, len: 2 }.into();
        assert_eq!(
            error.to_string(),
            "complex index 3 out of range for 2 complexes"
        );
    }
}
