//! Two-stage analysis: the remote analyzer first, heuristics on failure.

use std::sync::Arc;

use reqwest::Client;
use tracing::warn;
use wordwisdom_analyze::heuristic;
use wordwisdom_analyze::{Entity, Keyword, LanguageGuess, TextAnalyzer};
use wordwisdom_core::{AiServiceConfig, Error};

use crate::remote::RemoteAnalyzer;

/// Runs each operation on the primary analyzer when one is configured and
/// falls back to `wordwisdom_analyze::heuristic` on any error.
///
/// Every method is infallible. Blank input never reaches the primary.
#[derive(Clone)]
pub struct FallbackAnalyzer {
    primary: Option<Arc<dyn TextAnalyzer>>,
}

impl FallbackAnalyzer {
    pub fn new(primary: Option<Arc<dyn TextAnalyzer>>) -> Self {
        Self { primary }
    }

    /// No primary: every call is answered by the heuristics.
    pub fn heuristic_only() -> Self {
        Self { primary: None }
    }

    /// Use the AI server from `config` as primary, if one is configured.
    pub fn from_config(client: Client, config: &AiServiceConfig) -> Self {
        let primary = RemoteAnalyzer::from_config(client, config)
            .map(|remote| Arc::new(remote) as Arc<dyn TextAnalyzer>);
        Self::new(primary)
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    fn primary_for(&self, text: &str) -> Option<&dyn TextAnalyzer> {
        if text.trim().is_empty() {
            return None;
        }
        self.primary.as_deref()
    }

    pub async fn entities(&self, text: &str) -> Vec<Entity> {
        if let Some(primary) = self.primary_for(text) {
            match primary.entities(text).await {
                Ok(entities) => return entities,
                Err(e) => log_fallback("entities", primary, &e),
            }
        }
        heuristic::extract_entities(text)
    }

    pub async fn summarize(&self, text: &str, max_sentences: usize) -> String {
        if let Some(primary) = self.primary_for(text) {
            match primary.summarize(text, max_sentences).await {
                Ok(summary) => return summary,
                Err(e) => log_fallback("summarize", primary, &e),
            }
        }
        heuristic::summarize(text, max_sentences)
    }

    pub async fn detect_language(&self, text: &str) -> LanguageGuess {
        if let Some(primary) = self.primary_for(text) {
            match primary.detect_language(text).await {
                Ok(guess) => return guess,
                Err(e) => log_fallback("detect_language", primary, &e),
            }
        }
        heuristic::detect_language(text)
    }

    /// Translate via the primary. Same-language requests and failures
    /// return `text` unchanged.
    pub async fn translate(&self, text: &str, source_lang: Option<&str>, target_lang: &str) -> String {
        if heuristic::is_same_language(source_lang, target_lang) {
            return text.to_string();
        }
        if let Some(primary) = self.primary_for(text) {
            match primary.translate(text, source_lang, target_lang).await {
                Ok(translated) => return translated,
                Err(e) => log_fallback("translate", primary, &e),
            }
        }
        heuristic::translate(text, source_lang, target_lang)
    }

    pub async fn keywords(&self, text: &str, top_k: usize) -> Vec<Keyword> {
        if let Some(primary) = self.primary_for(text) {
            match primary.keywords(text, top_k).await {
                Ok(keywords) => return keywords,
                Err(e) => log_fallback("keywords", primary, &e),
            }
        }
        heuristic::extract_keywords(text, top_k)
    }
}

fn log_fallback(op: &str, primary: &dyn TextAnalyzer, e: &Error) {
    warn!("{} via {} failed, using heuristic: {}", op, primary.name(), e);
}
