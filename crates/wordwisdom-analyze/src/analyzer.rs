//! The analysis capability shared by remote and heuristic backends.
//!
//! The `TextAnalyzer` trait abstracts over where analysis happens.
//! Implementations:
//! - `HeuristicAnalyzer`: local regex/frequency heuristics, never fails
//! - `RemoteAnalyzer` (in `wordwisdom-ai`): the AI server over HTTP

use async_trait::async_trait;
use wordwisdom_core::Result;

use crate::heuristic;
use crate::types::{Entity, Keyword, LanguageGuess};

/// Text analysis operations.
#[async_trait]
pub trait TextAnalyzer: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Named entities, sorted by start and non-overlapping.
    async fn entities(&self, text: &str) -> Result<Vec<Entity>>;

    /// Summary of at most `max_sentences` sentences.
    async fn summarize(&self, text: &str, max_sentences: usize) -> Result<String>;

    /// Language of `text`.
    async fn detect_language(&self, text: &str) -> Result<LanguageGuess>;

    /// `text` translated into `target_lang`.
    async fn translate(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
    ) -> Result<String>;

    /// Up to `top_k` keywords, highest score first.
    async fn keywords(&self, text: &str, top_k: usize) -> Result<Vec<Keyword>>;
}

/// Local heuristics. Stateless; every method returns `Ok`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextAnalyzer for HeuristicAnalyzer {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    async fn entities(&self, text: &str) -> Result<Vec<Entity>> {
        Ok(heuristic::extract_entities(text))
    }

    async fn summarize(&self, text: &str, max_sentences: usize) -> Result<String> {
        Ok(heuristic::summarize(text, max_sentences))
    }

    async fn detect_language(&self, text: &str) -> Result<LanguageGuess> {
        Ok(heuristic::detect_language(text))
    }

    async fn translate(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
    ) -> Result<String> {
        Ok(heuristic::translate(text, source_lang, target_lang))
    }

    async fn keywords(&self, text: &str, top_k: usize) -> Result<Vec<Keyword>> {
        Ok(heuristic::extract_keywords(text, top_k))
    }
}
