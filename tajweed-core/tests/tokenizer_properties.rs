//! Property tests for tokenization and stop classification

use proptest::prelude::*;
use tajweed_core::chars::*;
use tajweed_core::{classify, tokenize, PauseMarkSet, PausePreset, StopReason, Tokenizer};

/// Characters a Quranic segment is built from, plus a few strays
fn segment_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        QAF, TAH, BEH, JEEM, DAL, SEEN, TEH, MEEM, FATHA, DAMMA, KASRA, SHADDA, SUKOON,
        TANWEEN_FATH, SUPERSCRIPT_ALEF, MADDA_ABOVE, SAKTAH, WAQF_SALA, WAQF_QALA, WAQF_MEEM,
        WAQF_LA, WAQF_JEEM, WAQF_TAH, ' ', ' ', '\n', '1', 'x',
    ])
}

fn segment() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_char(), 0..64).prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn complexes_reconstruct_their_source(text in segment()) {
        let chars: Vec<char> = text.chars().collect();
        for complex in tokenize(&text) {
            prop_assert_eq!(chars[complex.start()], complex.letter());
            prop_assert_eq!(&chars[complex.start() + 1..complex.end()], complex.diacritics());
            prop_assert!(!Tokenizer::is_skipped(complex.letter()));
            prop_assert!(complex.diacritics().iter().all(|&mark| is_diacritic(mark)));
        }
    }

    #[test]
    fn complexes_are_ordered_and_disjoint(text in segment()) {
        let complexes = tokenize(&text);
        for pair in complexes.windows(2) {
            prop_assert!(pair[0].end() <= pair[1].start());
        }
    }

    #[test]
    fn every_letter_opens_a_complex(text in segment()) {
        let chars: Vec<char> = text.chars().collect();
        let starts: Vec<usize> = tokenize(&text).iter().map(|c| c.start()).collect();
        let letters: Vec<usize> = (0..chars.len())
            .filter(|&i| !Tokenizer::is_skipped(chars[i]))
            .collect();
        prop_assert_eq!(starts, letters);
    }

    #[test]
    fn retokenizing_is_idempotent(text in segment()) {
        let first = tokenize(&text);
        let rebuilt: String = first.iter().map(|c| c.to_text()).collect();
        let second = tokenize(&rebuilt);

        let shape = |complexes: &[tajweed_core::LetterComplex]| {
            complexes
                .iter()
                .map(|c| (c.letter(), c.diacritics().to_vec()))
                .collect::<Vec<_>>()
        };
        prop_assert_eq!(shape(&first), shape(&second));

        let again: String = second.iter().map(|c| c.to_text()).collect();
        prop_assert_eq!(tokenize(&again), second);
    }

    #[test]
    fn last_complex_of_trimmed_segment_is_terminal(text in segment()) {
        let chars: Vec<char> = text.chars().collect();
        let complexes = tokenize(&text);
        if let Some(last) = complexes.last() {
            let trailing_skipped = chars[last.end()..]
                .iter()
                .all(|&ch| Tokenizer::is_skipped(ch));
            prop_assert!(trailing_skipped);

            if last.end() == chars.len() {
                for preset in PausePreset::ALL {
                    let stop = classify(&chars, last.end(), &PauseMarkSet::preset(preset));
                    prop_assert!(stop.is_stop);
                    prop_assert_eq!(stop.reason, StopReason::EndOfSegment);
                }
            }
        }
    }

    #[test]
    fn empty_mark_set_only_stops_at_end(text in segment()) {
        let chars: Vec<char> = text.chars().collect();
        for complex in tokenize(&text) {
            let stop = classify(&chars, complex.end(), &PauseMarkSet::empty());
            prop_assert_eq!(stop.is_stop, complex.end() == chars.len());
            prop_assert_ne!(stop.reason, StopReason::WaqfMark);
        }
    }
}
