//! Naive extractive summary: the leading sentences of the text.

/// Sentence count used when the caller asks for zero.
pub const DEFAULT_MAX_SENTENCES: usize = 2;

/// Split text into sentences at whitespace following `.`, `!` or `?`.
///
/// The terminator stays with the preceding sentence and the whole
/// whitespace run is dropped. No lookbehind in `regex`, so this walks chars.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() && matches!(prev, Some('.' | '!' | '?')) {
            let s = text[start..i].trim();
            if !s.is_empty() {
                sentences.push(s);
            }
            start = i;
        }
        prev = Some(c);
    }
    let s = text[start..].trim();
    if !s.is_empty() {
        sentences.push(s);
    }
    sentences
}

/// Return the first `max_sentences` sentences of `text`, joined by single
/// spaces. `0` means [`DEFAULT_MAX_SENTENCES`]. Blank input gives `""`.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    let max_sentences = if max_sentences == 0 {
        DEFAULT_MAX_SENTENCES
    } else {
        max_sentences
    };

    split_sentences(text)
        .into_iter()
        .take(max_sentences)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
