//! Built-in rules and lookup by name

pub mod qalqalah;

pub use qalqalah::{QalqalahKind, QalqalahRule};

use crate::error::{CoreError, Result};
use crate::rule::RulePlugin;

/// Built-in rules as `(name, description)`
pub const AVAILABLE_RULES: &[(&str, &str)] = &[(
    QalqalahRule::NAME,
    "Qalqalah (echo) on ق ط ب ج د: Sughra, Kubra, Akbar",
)];

/// Look up a built-in rule by name (case-insensitive)
pub fn rule_by_name(name: &str) -> Result<Box<dyn RulePlugin>> {
    match name.trim().to_ascii_lowercase().as_str() {
        QalqalahRule::NAME => Ok(Box::new(QalqalahRule::new())),
        _ => Err(CoreError::UnknownRule(name.to_string())),
    }
}
