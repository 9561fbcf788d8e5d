//! Segmentation of a text segment into letter complexes
//!
//! A single left-to-right scan. Whitespace, diacritics and pause marks cannot
//! open a complex and are skipped; any other character opens one and greedily
//! absorbs the diacritics that follow it.

use crate::chars;
use crate::complex::{Diacritics, LetterComplex};

/// Splits text into letter complexes
///
/// The skip step uses the full Waqf vocabulary ([`chars::ALL_PAUSE_MARKS`]),
/// never a caller's considered stop set, so a pause mark can never be read as
/// a letter under any stop configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Whether `ch` can never be the base letter of a complex
    #[inline]
    pub fn is_skipped(ch: char) -> bool {
        ch.is_whitespace() || chars::is_diacritic(ch) || chars::is_pause_mark(ch)
    }

    /// Tokenize a string; offsets are char offsets into `text`
    pub fn tokenize(&self, text: &str) -> Vec<LetterComplex> {
        let chars: Vec<char> = text.chars().collect();
        self.tokenize_chars(&chars)
    }

    /// Tokenize pre-decoded text
    pub fn tokenize_chars(&self, text: &[char]) -> Vec<LetterComplex> {
        let mut complexes = Vec::new();
        let mut i = 0;

        while i < text.len() {
            let ch = text[i];
            if Self::is_skipped(ch) {
                i += 1;
                continue;
            }

            let diacritics: Diacritics = text[i + 1..]
                .iter()
                .copied()
                .take_while(|&mark| chars::is_diacritic(mark))
                .collect();
            let complex = LetterComplex::new(ch, diacritics, i);
            i = complex.end();
            complexes.push(complex);
        }

        log::trace!("tokenized {} chars into {} complexes", text.len(), complexes.len());
        complexes
    }
}

/// Tokenize with the default tokenizer
pub fn tokenize(text: &str) -> Vec<LetterComplex> {
    Tokenizer::new().tokenize(text)
}
