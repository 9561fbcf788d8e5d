//! Letter complex: a base letter and the marks attached to it

use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

/// Inline storage for diacritics; Quranic letters rarely carry more than three
pub type Diacritics = SmallVec<[char; 4]>;

/// One atomic analysis unit
///
/// Offsets count chars (Unicode scalar values) from the start of the segment.
/// `end` is the offset right after the last diacritic, so
/// `end == start + 1 + diacritics.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterComplex {
    letter: char,
    diacritics: Diacritics,
    start: usize,
    end: usize,
}

impl LetterComplex {
    /// Create a complex starting at `start`; `end` is derived from the marks
    pub fn new(letter: char, diacritics: impl IntoIterator<Item = char>, start: usize) -> Self {
        let diacritics: Diacritics = diacritics.into_iter().collect();
        let end = start + 1 + diacritics.len();
        Self {
            letter,
            diacritics,
            start,
            end,
        }
    }

    #[inline]
    pub fn letter(&self) -> char {
        self.letter
    }

    #[inline]
    pub fn diacritics(&self) -> &[char] {
        &self.diacritics
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn has_diacritic(&self, mark: char) -> bool {
        self.diacritics.contains(&mark)
    }

    pub fn is_bare(&self) -> bool {
        self.diacritics.is_empty()
    }

    /// Letter followed by its diacritics, as written
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(4 * (1 + self.diacritics.len()));
        text.push(self.letter);
        text.extend(self.diacritics.iter());
        text
    }
}

impl fmt::Display for LetterComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        for mark in &self.diacritics {
            write!(f, "{mark}")?;
        }
        Ok(())
    }
}
