//! ASCII / non-ASCII language guess.

use crate::types::LanguageGuess;

/// Confidence attached to every non-empty heuristic guess.
pub const HEURISTIC_CONFIDENCE: f64 = 0.3;

/// Coarse binary guess: `"non-en"` if any char is outside 7-bit ASCII,
/// otherwise `"en"`, both at [`HEURISTIC_CONFIDENCE`]. Blank input is
/// `"und"` at 0.0.
pub fn detect_language(text: &str) -> LanguageGuess {
    if text.trim().is_empty() {
        return LanguageGuess::undetermined();
    }
    let lang = if text.is_ascii() { "en" } else { "non-en" };
    LanguageGuess::new(lang, HEURISTIC_CONFIDENCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_language() {
        assert_eq!(detect_language(""), LanguageGuess::new("und", 0.0));
        assert_eq!(
            detect_language("Hola, cómo estás"),
            LanguageGuess::new("non-en", 0.3)
        );
        assert_eq!(detect_language("Hello there"), LanguageGuess::new("en", 0.3));
    }

    #[test]
    fn test_ascii_foreign_text_reads_as_en() {
        assert_eq!(detect_language("Hola mundo").lang, "en");
        assert_eq!(detect_language("   ").lang, "und");
        assert_eq!(detect_language("naïve").lang, "non-en");
    }
}
