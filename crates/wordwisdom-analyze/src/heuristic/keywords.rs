//! Frequency-based keyword extraction.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Keyword;

pub const DEFAULT_TOP_K: usize = 8;

/// Tokens shorter than this are treated as noise.
const MIN_TOKEN_LEN: usize = 4;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z-]+").unwrap());

/// Count lowercase tokens of at least four letters, in first-seen order.
fn count_tokens(text: &str) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for m in TOKEN_RE.find_iter(text) {
        let token = m.as_str().to_ascii_lowercase();
        if token.len() < MIN_TOKEN_LEN {
            continue;
        }
        match index.get(&token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }
    counts
}

/// Top `top_k` tokens by raw occurrence count.
///
/// Scores are the counts themselves. Equal counts keep the order in which
/// the tokens first appeared.
pub fn extract_keywords(text: &str, top_k: usize) -> Vec<Keyword> {
    if text.trim().is_empty() || top_k == 0 {
        return Vec::new();
    }

    let mut counts = count_tokens(text);
    // Stable sort preserves first-seen order among ties.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(top_k)
        .map(|(phrase, count)| Keyword {
            phrase,
            score: count as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_frequent_first() {
        let kws = extract_keywords("Freedom freedom justice justice justice virtue", DEFAULT_TOP_K);
        assert_eq!(
            kws[0],
            Keyword {
                phrase: "justice".into(),
                score: 3.0
            }
        );
        assert_eq!(kws[1].phrase, "freedom");
        assert_eq!(kws[1].score, 2.0);
        assert_eq!(kws[2].phrase, "virtue");
        assert_eq!(kws.len(), 3);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let kws = extract_keywords("zeal apple mango apple zeal mango", 3);
        let phrases: Vec<&str> = kws.iter().map(|k| k.phrase.as_str()).collect();
        assert_eq!(phrases, vec!["zeal", "apple", "mango"]);
    }

    #[test]
    fn test_short_tokens_and_digits_excluded() {
        let kws = extract_keywords("the cat sat on 2024 mats; a1b2 ok well-known x-ray", 10);
        let phrases: Vec<&str> = kws.iter().map(|k| k.phrase.as_str()).collect();
        assert_eq!(phrases, vec!["mats", "well-known", "x-ray"]);
        for k in &kws {
            assert!(k.phrase.len() >= 4);
            assert!(!k.phrase.chars().any(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_top_k_bounds() {
        let text = "alpha beta gamma delta epsilon zeta theta iota kappa lambda";
        assert_eq!(extract_keywords(text, 3).len(), 3);
        assert!(extract_keywords(text, 0).is_empty());
        assert_eq!(extract_keywords("alpha alpha", 5).len(), 1);
    }

    #[test]
    fn test_empty() {
        assert!(extract_keywords("", 8).is_empty());
        assert!(extract_keywords(" \t", 8).is_empty());
    }

    #[test]
    fn test_non_ascii_letters_break_tokens() {
        let kws = extract_keywords("Sobre filosofía y ética", 8);
        let phrases: Vec<&str> = kws.iter().map(|k| k.phrase.as_str()).collect();
        assert_eq!(phrases, vec!["sobre", "filosof", "tica"]);
    }
}
