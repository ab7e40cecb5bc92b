//! Insight enrichment: generate an insight, then optionally detect its
//! language, translate it, and extract entities, a summary and keywords.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use wordwisdom_analyze::heuristic::{DEFAULT_MAX_SENTENCES, DEFAULT_TARGET_LANG, DEFAULT_TOP_K};
use wordwisdom_analyze::{Entity, Keyword, LanguageGuess};
use wordwisdom_core::{words, AiServiceConfig, Error, Result};

use crate::fallback::FallbackAnalyzer;
use crate::generate::{ContentSource, InsightGenerator};

const MAX_WORD_CHARS: usize = 64;
const MAX_TOPIC_CHARS: usize = 2000;
const MAX_ARTICLE_CHARS: usize = 20000;
const MAX_TONE_CHARS: usize = 32;
const MAX_WISDOM_CHAIN: usize = 6;

/// Topic passed to the generator when only an article was given.
const ARTICLE_TOPIC: &str = "article";

/// Incoming insight request with enrichment toggles.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InsightRequest {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub article: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub target_lang: Option<String>,
    #[serde(default)]
    pub enable_ner: bool,
    #[serde(default)]
    pub enable_summary: bool,
    #[serde(default)]
    pub enable_keywords: bool,
    #[serde(default)]
    pub enable_translation: bool,
}

impl InsightRequest {
    /// Check lengths and required fields.
    pub fn validate(&self) -> Result<()> {
        let word = self.word.trim();
        if word.is_empty() {
            return Err(Error::Validation("word is required".into()));
        }
        check_len("word", word, MAX_WORD_CHARS)?;

        if self.topic_text().is_empty() && self.article_text().is_empty() {
            return Err(Error::Validation("topic or article is required".into()));
        }
        check_len("topic", self.topic_text(), MAX_TOPIC_CHARS)?;
        check_len("article", self.article_text(), MAX_ARTICLE_CHARS)?;
        if let Some(tone) = &self.tone {
            check_len("tone", tone.trim(), MAX_TONE_CHARS)?;
        }
        if let Some(lang) = self.target_lang.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
            if lang.chars().count() != 2 {
                return Err(Error::Validation("target_lang must be 2 characters".into()));
            }
        }
        Ok(())
    }

    fn topic_text(&self) -> &str {
        self.topic.as_deref().map(str::trim).unwrap_or_default()
    }

    fn article_text(&self) -> &str {
        self.article.as_deref().map(str::trim).unwrap_or_default()
    }

    fn tone_text(&self) -> Option<&str> {
        self.tone.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    fn target_lang(&self) -> String {
        self.target_lang
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_TARGET_LANG)
            .to_lowercase()
    }
}

fn check_len(field: &str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(Error::Validation(format!(
            "{} may not be longer than {} characters",
            field, max
        )));
    }
    Ok(())
}

/// A generated insight with its enrichments.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedInsight {
    pub word: String,
    pub topic: String,
    pub tone: Option<String>,
    pub content: String,
    /// Which generation stage produced `content`.
    pub content_source: ContentSource,
    pub entities: Vec<Entity>,
    pub language: LanguageGuess,
    pub translated: String,
    pub target_lang: String,
    pub summary: Option<String>,
    pub keywords: Vec<Keyword>,
    #[serde(rename = "wisdomChain")]
    pub wisdom_chain: Vec<String>,
}

/// Generator plus analyzer, wired from one config.
#[derive(Clone)]
pub struct InsightPipeline {
    generator: InsightGenerator,
    analyzer: FallbackAnalyzer,
}

impl InsightPipeline {
    pub fn new(generator: InsightGenerator, analyzer: FallbackAnalyzer) -> Self {
        Self { generator, analyzer }
    }

    pub fn from_config(config: &AiServiceConfig) -> Self {
        let client = Client::new();
        Self::new(
            InsightGenerator::new(client.clone(), config),
            FallbackAnalyzer::from_config(client, config),
        )
    }

    pub fn analyzer(&self) -> &FallbackAnalyzer {
        &self.analyzer
    }

    /// Validate `request`, generate the insight and run the enabled enrichments.
    pub async fn run(&self, request: &InsightRequest) -> Result<GeneratedInsight> {
        request.validate()?;

        let word = request.word.trim();
        let topic = request.topic_text();
        let article = request.article_text();
        let source_text = if article.is_empty() { topic } else { article };
        let target_lang = request.target_lang();

        let generated = self
            .generator
            .generate(
                word,
                if topic.is_empty() { ARTICLE_TOPIC } else { topic },
                request.tone_text(),
            )
            .await;
        let content = generated.content;
        debug!("Generated insight for '{}' via {}", word, generated.source);

        let language = if request.enable_translation {
            let detect_text = if source_text.is_empty() {
                content.as_str()
            } else {
                source_text
            };
            self.analyzer.detect_language(detect_text).await
        } else {
            LanguageGuess::new("en", 0.0)
        };

        let translated = if request.enable_translation && !language.is(&target_lang) {
            self.analyzer
                .translate(&content, Some(language.lang.as_str()), &target_lang)
                .await
        } else {
            content.clone()
        };

        let entities = if request.enable_ner {
            self.analyzer.entities(&content).await
        } else {
            Vec::new()
        };

        let summary = if request.enable_summary {
            let text = if source_text.is_empty() {
                content.clone()
            } else {
                format!("{}\n\n{}", source_text, content)
            };
            Some(self.analyzer.summarize(&text, DEFAULT_MAX_SENTENCES).await)
        } else {
            None
        };

        let keywords = if request.enable_keywords {
            self.analyzer.keywords(&content, DEFAULT_TOP_K).await
        } else {
            Vec::new()
        };

        let wisdom_chain = wisdom_chain(&keywords);

        Ok(GeneratedInsight {
            word: word.to_string(),
            topic: topic.to_string(),
            tone: request.tone_text().map(str::to_string),
            content,
            content_source: generated.source,
            entities,
            language,
            translated,
            target_lang,
            summary,
            keywords,
            wisdom_chain,
        })
    }
}

/// Curated words related to the keywords: every curated word containing a
/// keyword phrase, de-duplicated, at most six.
pub fn wisdom_chain(keywords: &[Keyword]) -> Vec<String> {
    let mut chain: Vec<String> = Vec::new();
    for kw in keywords {
        let phrase = kw.phrase.to_lowercase();
        for word in words::containing(&phrase) {
            if !chain.iter().any(|w| w == word) {
                chain.push(word.to_string());
            }
        }
    }
    chain.truncate(MAX_WISDOM_CHAIN);
    chain
}
