//! Letter-complex analysis of diacritic-annotated Quranic Arabic
//!
//! The pipeline has three stages:
//! - **Tokenizer**: splits a segment into letter complexes (base letter plus
//!   attached diacritics)
//! - **Stop classifier**: decides whether recitation pauses after a complex
//! - **Rule plugins**: inspect a complex with its stop context and the whole
//!   segment around it, and emit structured findings
//!
//! # Example
//!
//! ```rust
//! use tajweed_core::{classify, tokenize, PauseMarkSet, PausePreset, QalqalahRule, RulePlugin};
//!
//! let text = "\u{0642}\u{0652}"; // qaf + sukoon
//! let chars: Vec<char> = text.chars().collect();
//! let complexes = tokenize(text);
//! let stop = classify(&chars, complexes[0].end(), &PauseMarkSet::preset(PausePreset::Default));
//!
//! let finding = QalqalahRule::new()
//!     .check(&complexes[0], &stop, &complexes, 0)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(finding.kind, "Kubra (Major)");
//! ```

pub mod chars;
pub mod complex;
pub mod error;
pub mod pause;
pub mod rule;
pub mod rules;
pub mod stop;
pub mod tokenizer;

pub use complex::{Diacritics, LetterComplex};
pub use error::{CoreError, Result, RuleError};
pub use pause::{PauseMarkSet, PausePreset};
pub use rule::{RuleFinding, RulePlugin};
pub use rules::{rule_by_name, QalqalahKind, QalqalahRule, AVAILABLE_RULES};
pub use stop::{classify, StopContext, StopReason};
pub use tokenizer::{tokenize, Tokenizer};
