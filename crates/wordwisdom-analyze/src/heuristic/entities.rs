//! Regex entity extraction: URLs, years and capitalized word runs.

use once_cell::sync::Lazy;
use regex::Regex;

use super::overlap::{resolve_overlaps, Candidate};
use crate::types::{Entity, EntityLabel};

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)[0-9]{2}\b").unwrap());
static PROPN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+(?: [A-Z][a-z]+)*\b").unwrap());

/// Extract URL, DATE and PROPN entities.
///
/// The result is sorted by start and never contains overlapping spans.
/// Offsets are codepoint offsets into `text`.
pub fn extract_entities(text: &str) -> Vec<Entity> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    let patterns: [(EntityLabel, &Regex); 3] = [
        (EntityLabel::Url, &URL_RE),
        (EntityLabel::Date, &YEAR_RE),
        (EntityLabel::Propn, &PROPN_RE),
    ];
    for (label, re) in patterns {
        for m in re.find_iter(text) {
            // Pronoun guard
            if label == EntityLabel::Propn && m.as_str().eq_ignore_ascii_case("i") {
                continue;
            }
            candidates.push(Candidate::new(label.clone(), m.start(), m.end()));
        }
    }

    to_entities(text, resolve_overlaps(candidates))
}

/// Convert sorted, non-overlapping byte spans into entities with codepoint
/// offsets in a single forward pass over `text`.
fn to_entities(text: &str, spans: Vec<Candidate>) -> Vec<Entity> {
    let mut entities = Vec::with_capacity(spans.len());
    let mut byte_pos = 0;
    let mut char_pos = 0;

    for span in spans {
        char_pos += text[byte_pos..span.start].chars().count();
        let start = char_pos;
        let slice = &text[span.start..span.end];
        char_pos += slice.chars().count();
        byte_pos = span.end;

        entities.push(Entity {
            text: slice.to_string(),
            label: span.label,
            start,
            end: char_pos,
        });
    }
    entities
}
