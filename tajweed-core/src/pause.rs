//! Caller-supplied set of pause marks treated as stops
//!
//! The tokenizer always skips the whole Waqf vocabulary. A `PauseMarkSet`
//! only decides which of those marks the stop classifier reports as a stop.

use crate::chars;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Set of pause-mark characters considered as recitation stops
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PauseMarkSet {
    marks: HashSet<char>,
}

impl PauseMarkSet {
    /// Create from a list of characters
    pub fn new(marks: impl IntoIterator<Item = char>) -> Self {
        let marks: HashSet<char> = marks.into_iter().collect();
        for mark in &marks {
            if !chars::NAMED_MARKS.contains(mark) {
                log::warn!(
                    "pause mark {:?} (U+{:04X}) is outside the Waqf vocabulary",
                    mark,
                    *mark as u32
                );
            }
        }
        Self { marks }
    }

    /// Empty set: only end-of-segment stops remain active
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the set for a named preset
    pub fn preset(preset: PausePreset) -> Self {
        match preset {
            PausePreset::Default => Self::new(chars::DEFAULT_STOP_MARKS),
            PausePreset::Mandatory => Self::new(chars::MANDATORY_STOP_MARKS),
            PausePreset::None => Self::empty(),
            PausePreset::All => Self::new(chars::NAMED_MARKS),
        }
    }

    /// O(1) membership check
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.marks.contains(&ch)
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Marks in code point order, for stable display
    pub fn sorted(&self) -> Vec<char> {
        let mut marks: Vec<char> = self.marks.iter().copied().collect();
        marks.sort_unstable();
        marks
    }
}

impl FromIterator<char> for PauseMarkSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Named pause-mark configurations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PausePreset {
    /// Sala, Qala, Meem, Jeem, three dots and Tah
    #[default]
    Default,
    /// Compulsory (Meem) and preferred (Qala) stops only
    Mandatory,
    /// No mid-segment stops
    None,
    /// Every named mark, including La and Saktah
    All,
}

impl PausePreset {
    pub const ALL: [PausePreset; 4] = [
        PausePreset::Default,
        PausePreset::Mandatory,
        PausePreset::None,
        PausePreset::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PausePreset::Default => "default",
            PausePreset::Mandatory => "mandatory",
            PausePreset::None => "none",
            PausePreset::All => "all",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PausePreset::Default => "Sala, Qala, Meem, Jeem, three dots and Tah",
            PausePreset::Mandatory => "compulsory (Meem) and preferred (Qala) stops",
            PausePreset::None => "end of segment only",
            PausePreset::All => "every named mark, including La and Saktah",
        }
    }
}

impl fmt::Display for PausePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PausePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PausePreset::ALL
            .into_iter()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown pause-mark preset: {s}"))
    }
}
