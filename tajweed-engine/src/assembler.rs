//! Result assembly
//!
//! Turns plugin findings into [`RuleInstance`] records carrying their
//! provenance, and concatenates per-segment results in corpus order.

use crate::corpus::{Segment, SourceType};
use serde::{Deserialize, Serialize};
use tajweed_core::RuleFinding;

/// One rule match with its position in the corpus
///
/// Serializes as a single flat object: provenance keys followed by the
/// finding's `type`, `condition_details` and rule-specific fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleInstance {
    sura: u32,
    aya: u32,
    source_type: SourceType,
    word_context: String,
    char_index_in_text: usize,
    #[serde(flatten)]
    finding: RuleFinding,
}

impl RuleInstance {
    pub fn sura(&self) -> u32 {
        self.sura
    }

    pub fn aya(&self) -> u32 {
        self.aya
    }

    pub fn source_type(&self) -> SourceType {
        self.source_type
    }

    /// The whitespace-delimited word containing the match
    pub fn word_context(&self) -> &str {
        &self.word_context
    }

    /// Char offset of the matched letter within its segment
    pub fn char_index(&self) -> usize {
        self.char_index_in_text
    }

    pub fn finding(&self) -> &RuleFinding {
        &self.finding
    }

    /// Shorthand for the finding's `type`
    pub fn kind(&self) -> &str {
        &self.finding.kind
    }
}

/// Builds rule instances for one segment
#[derive(Debug)]
pub struct ResultAssembler<'a> {
    segment: &'a Segment,
    chars: &'a [char],
}

impl<'a> ResultAssembler<'a> {
    pub fn new(segment: &'a Segment, chars: &'a [char]) -> Self {
        Self { segment, chars }
    }

    /// Wrap a finding for the complex starting at `char_index`
    pub fn instance(&self, char_index: usize, finding: RuleFinding) -> RuleInstance {
        RuleInstance {
            sura: self.segment.sura,
            aya: self.segment.aya,
            source_type: self.segment.source_type,
            word_context: word_at(self.chars, char_index),
            char_index_in_text: char_index,
            finding,
        }
    }
}

/// Concatenate per-segment result lists, preserving their order
pub fn concat_in_order(per_segment: Vec<Vec<RuleInstance>>) -> Vec<RuleInstance> {
    let total = per_segment.iter().map(Vec::len).sum();
    let mut result = Vec::with_capacity(total);
    for instances in per_segment {
        result.extend(instances);
    }
    result
}

/// The word around `index`, bounded by whitespace or the text edges
///
/// A position on whitespace, or outside the text, has no word.
pub fn word_at(chars: &[char], index: usize) -> String {
    match chars.get(index) {
        Some(ch) if !ch.is_whitespace() => {}
        _ => return String::new(),
    }

    let start = chars[..index]
        .iter()
        .rposition(|ch| ch.is_whitespace())
        .map_or(0, |ws| ws + 1);
    let end = chars[index..]
        .iter()
        .position(|ch| ch.is_whitespace())
        .map_or(chars.len(), |ws| index + ws);

    chars[start..end].iter().collect()
}
