//! WordWisdom Analyze: entity extraction, summaries, keywords, language.
//!
//! `heuristic` holds the pure local implementations; `TextAnalyzer` is the
//! capability trait that remote backends implement as well.

pub mod analyzer;
pub mod heuristic;
pub mod types;

pub use analyzer::{HeuristicAnalyzer, TextAnalyzer};
pub use types::{Entity, EntityLabel, Keyword, LanguageGuess};
