//! Pass-through translation.

pub const DEFAULT_TARGET_LANG: &str = "en";

/// Whether translating from `source_lang` to `target_lang` is a no-op.
pub fn is_same_language(source_lang: Option<&str>, target_lang: &str) -> bool {
    source_lang.is_some_and(|src| src.trim().eq_ignore_ascii_case(target_lang.trim()))
}

/// Heuristic "translation": always returns `text` unchanged.
///
/// No translation happens here. Callers on the fallback path must not
/// assume the output is in `target_lang`. Same-language requests are the
/// identity everywhere; [`is_same_language`] lets callers skip remote calls.
pub fn translate(text: &str, _source_lang: Option<&str>, _target_lang: &str) -> String {
    text.to_string()
}
