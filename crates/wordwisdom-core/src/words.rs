//! Curated vocabulary offered on the insight generator page.

use serde::Serialize;

/// A curated word and its one-line definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CuratedWord {
    pub word: &'static str,
    pub definition: &'static str,
}

const fn entry(word: &'static str, definition: &'static str) -> CuratedWord {
    CuratedWord { word, definition }
}

/// Curated words in display order.
pub const CURATED_WORDS: &[CuratedWord] = &[
    entry("catharsis", "emotional release that leads to moral or psychological renewal"),
    entry("ontology", "the philosophical study of being, existence, and categories of reality"),
    entry("hegemony", "dominance maintained through cultural, ideological, or institutional means"),
    entry("dialectic", "reasoning through thesis, antithesis, and synthesis to reveal truth"),
    entry("praxis", "reflective action that puts theory into practice to transform reality"),
    entry("syncretism", "amalgamation of different beliefs or practices into a new whole"),
    entry("zeitgeist", "the defining spirit or mood of a historical period"),
    entry("teleology", "explanation in terms of ends, goals, or purposes"),
    entry("solipsism", "view that only one\u{2019}s own mind is sure to exist"),
    entry("hermeneutics", "the art and theory of interpretation, especially of texts"),
    entry("anomie", "social instability caused by the breakdown of norms and values"),
    entry("palimpsest", "something reused or altered while bearing traces of its earlier form"),
    entry("epistemology", "the study of knowledge, justification, and belief"),
    entry("pluralism", "coexistence of diverse groups, values, or perspectives within a society"),
    entry("metanoia", "profound change of heart or mind; transformative reorientation"),
];

/// Look up a curated word (case-insensitive).
pub fn lookup(word: &str) -> Option<&'static CuratedWord> {
    let word = word.trim();
    CURATED_WORDS.iter().find(|w| w.word.eq_ignore_ascii_case(word))
}

/// Curated words containing `fragment` (already lowercased) as a substring.
pub fn containing(fragment: &str) -> impl Iterator<Item = &'static str> + '_ {
    CURATED_WORDS
        .iter()
        .map(|w| w.word)
        .filter(move |w| !fragment.is_empty() && w.contains(fragment))
}
