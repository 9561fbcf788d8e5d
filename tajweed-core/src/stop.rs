//! Stop-context classification
//!
//! Decides whether recitation pauses right after a letter complex. The check
//! is local to one segment and never looks into the next one.

use crate::chars;
use crate::pause::PauseMarkSet;
use serde::Serialize;

/// Why recitation stops at a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Nothing follows in the segment
    EndOfSegment,
    /// The next non-whitespace character is a considered pause mark
    WaqfMark,
    /// Not a stop
    None,
}

/// Stop context of a position within a segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopContext {
    pub is_stop: bool,
    pub reason: StopReason,
    pub waqf_char: Option<char>,
    /// Human-readable description; empty when not a stop
    pub details: String,
}

impl StopContext {
    pub fn end_of_segment() -> Self {
        Self {
            is_stop: true,
            reason: StopReason::EndOfSegment,
            waqf_char: None,
            details: "End of text.".to_string(),
        }
    }

    pub fn waqf(mark: char) -> Self {
        let display = chars::pause_mark_name(mark)
            .map(str::to_string)
            .unwrap_or_else(|| mark.to_string());
        Self {
            is_stop: true,
            reason: StopReason::WaqfMark,
            waqf_char: Some(mark),
            details: format!("Followed by Waqf mark '{display}'."),
        }
    }

    pub fn continuing() -> Self {
        Self {
            is_stop: false,
            reason: StopReason::None,
            waqf_char: None,
            details: String::new(),
        }
    }
}

/// First non-whitespace character at or after `from`, with its offset
pub fn next_meaningful_char(text: &[char], from: usize) -> Option<(usize, char)> {
    text.iter()
        .copied()
        .enumerate()
        .skip(from)
        .find(|(_, ch)| !ch.is_whitespace())
}

/// Classify the position `offset` (the `end` of a complex) in `text`
///
/// End of segment wins over everything else. An offset past the end is
/// treated as end of segment.
pub fn classify(text: &[char], offset: usize, considered: &PauseMarkSet) -> StopContext {
    if offset >= text.len() {
        return StopContext::end_of_segment();
    }

    match next_meaningful_char(text, offset) {
        Some((_, ch)) if considered.contains(ch) => StopContext::waqf(ch),
        _ => StopContext::continuing(),
    }
}

/// Convenience wrapper over [`classify`] for string input
pub fn classify_str(text: &str, offset: usize, considered: &PauseMarkSet) -> StopContext {
    let chars: Vec<char> = text.chars().collect();
    classify(&chars, offset, considered)
}
