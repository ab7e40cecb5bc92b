//! Heuristic text analysis used when no remote AI server answers.
//!
//! Regex entity extraction, frequency keywords, leading-sentence summaries,
//! an ASCII language guess and pass-through translation. Every function is
//! pure and total: any string in, a well-formed (possibly empty) result out.

pub mod entities;
pub mod keywords;
pub mod language;
pub mod overlap;
pub mod summary;
pub mod translate;

pub use entities::extract_entities;
pub use keywords::{extract_keywords, DEFAULT_TOP_K};
pub use language::detect_language;
pub use summary::{split_sentences, summarize, DEFAULT_MAX_SENTENCES};
pub use translate::{is_same_language, translate, DEFAULT_TARGET_LANG};
