//! Qalqalah: the echoing release of ق ط ب ج د when they carry no vowel
//!
//! - Explicit Sukoon: Sughra mid-speech, Kubra at a stop.
//! - At a stop without Sukoon: a plain or voweled letter becomes Kubra,
//!   a letter with Shadda becomes Akbar.

use crate::chars;
use crate::complex::LetterComplex;
use crate::error::RuleError;
use crate::rule::{RuleFinding, RulePlugin};
use crate::stop::StopContext;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qalqalah sub-types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QalqalahKind {
    /// Minor, mid-speech
    Sughra,
    /// Major, at a stop
    Kubra,
    /// Greatest, doubled letter at a stop
    Akbar,
}

impl QalqalahKind {
    pub const ALL: [QalqalahKind; 3] = [QalqalahKind::Sughra, QalqalahKind::Kubra, QalqalahKind::Akbar];

    /// Label written into the finding's `type` field
    pub fn label(&self) -> &'static str {
        match self {
            QalqalahKind::Sughra => "Sughra (Minor)",
            QalqalahKind::Kubra => "Kubra (Major)",
            QalqalahKind::Akbar => "Akbar/Kubra (Greatest/Major)",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

impl fmt::Display for QalqalahKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decision for one complex, before it is turned into a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QalqalahMatch {
    pub kind: QalqalahKind,
    /// Clause appended to the stop context's details
    pub clause: &'static str,
}

/// The Qalqalah rule plugin
#[derive(Debug, Clone, Copy, Default)]
pub struct QalqalahRule;

impl QalqalahRule {
    pub const NAME: &'static str = "qalqalah";

    pub fn new() -> Self {
        Self
    }

    /// Pure decision logic, separated from finding assembly
    pub fn decide(complex: &LetterComplex, stop_context: &StopContext) -> Option<QalqalahMatch> {
        if !chars::is_qalqalah_letter(complex.letter()) {
            return None;
        }

        let at_stop = stop_context.is_stop;

        if complex.has_diacritic(chars::SUKOON) {
            return Some(if at_stop {
                QalqalahMatch {
                    kind: QalqalahKind::Kubra,
                    clause: "Explicit Sukoon at Stop.",
                }
            } else {
                QalqalahMatch {
                    kind: QalqalahKind::Sughra,
                    clause: "Explicit Sukoon mid-speech.",
                }
            });
        }

        if !at_stop {
            return None;
        }

        let has_shadda = complex.has_diacritic(chars::SHADDA);
        let voweled = complex
            .diacritics()
            .iter()
            .any(|&mark| chars::is_vowel_or_tanween(mark));

        if complex.is_bare() || (voweled && !has_shadda) {
            Some(QalqalahMatch {
                kind: QalqalahKind::Kubra,
                clause: "Stop on voweled/plain letter.",
            })
        } else if has_shadda {
            Some(QalqalahMatch {
                kind: QalqalahKind::Akbar,
                clause: "Shadda at Stop.",
            })
        } else {
            None
        }
    }

    /// Stop details with a terminating period, followed by the branch clause
    fn condition_details(stop_context: &StopContext, clause: &str) -> String {
        let mut details = stop_context.details.trim().to_string();
        if !details.is_empty() && !details.ends_with('.') {
            details.push('.');
        }
        if !details.is_empty() {
            details.push(' ');
        }
        details.push_str(clause);
        details
    }
}

impl RulePlugin for QalqalahRule {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn check(
        &self,
        complex: &LetterComplex,
        stop_context: &StopContext,
        all_complexes: &[LetterComplex],
        index: usize,
    ) -> Result<Option<RuleFinding>, RuleError> {
        if index >= all_complexes.len() {
            return Err(RuleError::IndexOutOfRange {
                index,
                len: all_complexes.len(),
            });
        }

        Ok(Self::decide(complex, stop_context).map(|hit| {
            RuleFinding::new(
                hit.kind.label(),
                Self::condition_details(stop_context, hit.clause),
            )
            .with_field("qalqalah_letter", complex.letter().to_string())
            .with_field("full_letter_complex", complex.to_text())
        }))
    }
}
