//! Static Arabic character tables
//!
//! Every table here is immutable, process-wide data. Membership checks are
//! `match` based so they compile down to range/jump tables and need no
//! initialisation or synchronisation.

// ========= Base letters referenced by rules =========

/// ب ARABIC LETTER BEH
pub const BEH: char = '\u{0628}';
/// ت ARABIC LETTER TEH
pub const TEH: char = '\u{062A}';
/// ج ARABIC LETTER JEEM
pub const JEEM: char = '\u{062C}';
/// د ARABIC LETTER DAL
pub const DAL: char = '\u{062F}';
/// س ARABIC LETTER SEEN
pub const SEEN: char = '\u{0633}';
/// ط ARABIC LETTER TAH (the letter, not the Waqf sign)
pub const TAH: char = '\u{0637}';
/// ق ARABIC LETTER QAF
pub const QAF: char = '\u{0642}';
/// م ARABIC LETTER MEEM (the letter, not the Waqf sign)
pub const MEEM: char = '\u{0645}';

/// Letters subject to Qalqalah: ق ط ب ج د
pub const QALQALAH_LETTERS: [char; 5] = [QAF, TAH, BEH, JEEM, DAL];

// ========= Harakat =========

/// ARABIC FATHA
pub const FATHA: char = '\u{064E}';
/// ARABIC DAMMA
pub const DAMMA: char = '\u{064F}';
/// ARABIC KASRA
pub const KASRA: char = '\u{0650}';
/// ARABIC SHADDA
pub const SHADDA: char = '\u{0651}';
/// ARABIC SUKUN
pub const SUKOON: char = '\u{0652}';

/// ARABIC FATHATAN
pub const TANWEEN_FATH: char = '\u{064B}';
/// ARABIC DAMMATAN
pub const TANWEEN_DAMM: char = '\u{064C}';
/// ARABIC KASRATAN
pub const TANWEEN_KASR: char = '\u{064D}';

// ========= Quranic annotation marks =========

/// ARABIC MADDAH ABOVE
pub const MADDA_ABOVE: char = '\u{0653}';
/// ARABIC LETTER SUPERSCRIPT ALEF (dagger alef)
pub const SUPERSCRIPT_ALEF: char = '\u{0670}';
/// ARABIC SMALL HIGH ROUNDED ZERO
pub const SMALL_HIGH_ROUNDED_ZERO: char = '\u{06DF}';
/// ARABIC SMALL HIGH DOTLESS HEAD OF KHAH
pub const SMALL_HIGH_DOTLESS_HEAD_OF_KHAH: char = '\u{06E1}';
/// ARABIC SMALL HIGH MEEM ISOLATED FORM
pub const SMALL_HIGH_MEEM: char = '\u{06E2}';
/// ARABIC SMALL LOW SEEN
pub const SMALL_LOW_SEEN: char = '\u{06E3}';
/// ARABIC SMALL HIGH MADDA
pub const SMALL_HIGH_MADDA: char = '\u{06E4}';
/// ARABIC SMALL WAW
pub const SMALL_WAW: char = '\u{06E5}';
/// ARABIC SMALL YEH
pub const SMALL_YEH: char = '\u{06E6}';
/// ARABIC SMALL HIGH SEEN, written for a Saktah (breathless pause)
pub const SAKTAH: char = '\u{06DC}';

// ========= Waqf (pause) marks =========

/// ۖ Sala: continuing is preferred
pub const WAQF_SALA: char = '\u{06D6}';
/// ۗ Qala: stopping is preferred
pub const WAQF_QALA: char = '\u{06D7}';
/// ۘ Meem: compulsory stop
pub const WAQF_MEEM: char = '\u{06D8}';
/// ۙ La: do not stop
pub const WAQF_LA: char = '\u{06D9}';
/// ۚ Jeem: permissible stop
pub const WAQF_JEEM: char = '\u{06DA}';
/// ۛ Three dots (Mu'anaqah): stop at one of two places
pub const WAQF_THREE_DOTS: char = '\u{06DB}';
/// ؕ Tah: absolute stop
pub const WAQF_TAH: char = '\u{0615}';

/// Marks that conventionally allow a stop. Waqf La is excluded: it forbids one.
pub const DEFAULT_STOP_MARKS: [char; 6] = [
    WAQF_SALA,
    WAQF_QALA,
    WAQF_MEEM,
    WAQF_JEEM,
    WAQF_THREE_DOTS,
    WAQF_TAH,
];

/// Compulsory and preferred stops only
pub const MANDATORY_STOP_MARKS: [char; 2] = [WAQF_MEEM, WAQF_QALA];

/// The full Waqf vocabulary. The tokenizer never lets any of these open a
/// letter complex, whichever subset a caller considers a stop.
pub const ALL_PAUSE_MARKS: [char; 7] = [
    WAQF_SALA,
    WAQF_QALA,
    WAQF_MEEM,
    WAQF_LA,
    WAQF_JEEM,
    WAQF_THREE_DOTS,
    WAQF_TAH,
];

/// Every mark with a display name, Saktah included
pub const NAMED_MARKS: [char; 8] = [
    WAQF_SALA,
    WAQF_QALA,
    WAQF_MEEM,
    WAQF_LA,
    WAQF_JEEM,
    WAQF_THREE_DOTS,
    WAQF_TAH,
    SAKTAH,
];

/// Diacritic or Quranic annotation mark that attaches to the preceding letter
#[inline]
pub fn is_diacritic(ch: char) -> bool {
    matches!(
        ch,
        FATHA
            | DAMMA
            | KASRA
            | SHADDA
            | SUKOON
            | TANWEEN_FATH
            | TANWEEN_DAMM
            | TANWEEN_KASR
            | MADDA_ABOVE
            | SUPERSCRIPT_ALEF
            | SAKTAH
            | SMALL_HIGH_ROUNDED_ZERO
            | SMALL_HIGH_DOTLESS_HEAD_OF_KHAH
            | SMALL_HIGH_MEEM
            | SMALL_LOW_SEEN
            | SMALL_HIGH_MADDA
            | SMALL_WAW
            | SMALL_YEH
    )
}

/// Short vowel (Fatha, Damma, Kasra) or tanween
#[inline]
pub fn is_vowel_or_tanween(ch: char) -> bool {
    matches!(
        ch,
        FATHA | DAMMA | KASRA | TANWEEN_FATH | TANWEEN_DAMM | TANWEEN_KASR
    )
}

/// Member of the Waqf vocabulary ([`ALL_PAUSE_MARKS`])
#[inline]
pub fn is_pause_mark(ch: char) -> bool {
    ALL_PAUSE_MARKS.contains(&ch)
}

#[inline]
pub fn is_qalqalah_letter(ch: char) -> bool {
    QALQALAH_LETTERS.contains(&ch)
}

/// Human-readable name of a pause mark, `None` for unnamed characters
pub fn pause_mark_name(ch: char) -> Option<&'static str> {
    let name = match ch {
        WAQF_SALA => "صلى (Wasl Awla)",
        WAQF_QALA => "قلى (Waqf Awla)",
        WAQF_MEEM => "م (Waqf Laazim)",
        WAQF_JEEM => "ج (Waqf Jaaiz)",
        WAQF_THREE_DOTS => "∴ (Muan`aqah)",
        WAQF_TAH => "ط (Waqf Mutlaq)",
        WAQF_LA => "لا (Forbidden Stop)",
        SAKTAH => "سكتة (Saktah)",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_disjoint() {
        for mark in ALL_PAUSE_MARKS {
            assert!(!is_diacritic(mark), "{mark:?} is both pause mark and diacritic");
        }
        for letter in QALQALAH_LETTERS {
            assert!(!is_diacritic(letter));
            assert!(!is_pause_mark(letter));
        }
    }

    #[test]
    fn test_letter_forms_are_not_waqf_signs() {
        assert!(!is_pause_mark(TAH));
        assert!(!is_pause_mark(MEEM));
        assert!(is_pause_mark(WAQF_TAH));
        assert!(is_pause_mark(WAQF_MEEM));
    }

    #[test]
    fn test_saktah_attaches_as_diacritic() {
        assert!(is_diacritic(SAKTAH));
        assert!(!is_pause_mark(SAKTAH));
        assert_eq!(pause_mark_name(SAKTAH), Some("سكتة (Saktah)"));
    }

    #[test]
    fn test_vowel_classification() {
        assert!(is_vowel_or_tanween(FATHA));
        assert!(is_vowel_or_tanween(TANWEEN_KASR));
        assert!(!is_vowel_or_tanween(SUKOON));
        assert!(!is_vowel_or_tanween(SHADDA));
    }

    #[test]
    fn test_every_named_mark_has_a_name() {
        for mark in NAMED_MARKS {
            assert!(pause_mark_name(mark).is_some());
        }
        assert_eq!(pause_mark_name(QAF), None);
    }
}
