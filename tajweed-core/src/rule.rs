//! Public contract for rule plugins
//!
//! A rule inspects one letter complex at a time, but always receives the
//! whole segment's complex list and the current index as well, so rules
//! that need neighbours share the same signature as rules that do not.

use crate::complex::LetterComplex;
use crate::error::RuleError;
use crate::stop::StopContext;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of a rule match
///
/// Serializes flat: `type`, `condition_details`, then every rule-specific
/// field at the same level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFinding {
    /// Rule sub-type label
    #[serde(rename = "type")]
    pub kind: String,
    /// Why the rule fired
    pub condition_details: String,
    /// Rule-specific fields
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl RuleFinding {
    pub fn new(kind: impl Into<String>, condition_details: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            condition_details: condition_details.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Attach a rule-specific field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

/// A Tajweed rule
///
/// Implementations must be pure functions of their arguments: no hidden
/// state, and `all_complexes` is shared read-only. Returning `Ok(None)` means
/// the rule does not apply; `Err` is reserved for defects in the rule.
pub trait RulePlugin: Send + Sync {
    /// Short identifier, e.g. `"qalqalah"`
    fn name(&self) -> &str;

    /// Check the complex at `all_complexes[index]`
    ///
    /// # Arguments
    /// * `complex` - the complex under inspection
    /// * `stop_context` - stop classification right after `complex`
    /// * `all_complexes` - every complex of the current segment, in order
    /// * `index` - position of `complex` in `all_complexes`
    fn check(
        &self,
        complex: &LetterComplex,
        stop_context: &StopContext,
        all_complexes: &[LetterComplex],
        index: usize,
    ) -> Result<Option<RuleFinding>, RuleError>;
}

/// Plain functions and closures with the plugin signature are plugins
impl<F> RulePlugin for F
where
    F: Fn(&LetterComplex, &StopContext, &[LetterComplex], usize) -> Result<Option<RuleFinding>, RuleError>
        + Send
        + Sync,
{
    fn name(&self) -> &str {
        "custom"
    }

    fn check(
        &self,
        complex: &LetterComplex,
        stop_context: &StopContext,
        all_complexes: &[LetterComplex],
        index: usize,
    ) -> Result<Option<RuleFinding>, RuleError> {
        self(complex, stop_context, all_complexes, index)
    }
}
