//! Accent stripping

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

/// Remove diacritics by decomposing, dropping nonspacing marks (Mn) and
/// recomposing. Spacing (Mc) and enclosing (Me) marks are kept.
pub fn remove_accents(original: &str) -> String {
    original
        .nfd()
        .filter(|c| get_general_category(*c) != GeneralCategory::NonspacingMark)
        .nfc()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_acute_and_diaeresis() {
        assert_eq!(remove_accents("canción"), "cancion");
        assert_eq!(remove_accents("pingüino"), "pinguino");
        assert_eq!(remove_accents("Ángel"), "Angel");
    }

    #[test]
    fn test_strips_tilde() {
        assert_eq!(remove_accents("niño"), "nino");
    }

    #[test]
    fn test_plain_ascii_unchanged() {
        assert_eq!(remove_accents("casa"), "casa");
        assert_eq!(remove_accents(""), "");
    }

    #[test]
    fn test_decomposed_input() {
        // "e" followed by U+0301 COMBINING ACUTE ACCENT
        assert_eq!(remove_accents("cafe\u{301}"), "cafe");
    }

    #[test]
    fn test_spacing_vowel_signs_kept() {
        // U+093F and U+0940 are Mc and stay; U+0902 ANUSVARA is Mn and goes
        assert_eq!(remove_accents("हिंदी"), "हिदी");
    }

    #[test]
    fn test_enclosing_mark_kept() {
        assert_eq!(remove_accents("a\u{20DD}"), "a\u{20DD}");
    }
}
