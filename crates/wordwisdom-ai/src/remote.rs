//! HTTP client for the external AI server.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use wordwisdom_analyze::{Entity, Keyword, LanguageGuess, TextAnalyzer};
use wordwisdom_core::{AiServiceConfig, AiTimeouts, Result};

use crate::http::send_json;
use crate::wire::*;

/// `TextAnalyzer` backed by the AI server (`/ner`, `/summarize`, ...).
///
/// Every failure is returned as an error; falling back is the caller's job.
#[derive(Debug, Clone)]
pub struct RemoteAnalyzer {
    client: Client,
    base_url: String,
    timeouts: AiTimeouts,
}

impl RemoteAnalyzer {
    pub fn new(client: Client, base_url: impl Into<String>, timeouts: AiTimeouts) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            timeouts,
        }
    }

    /// Build from config; `None` when no AI server endpoint is set.
    pub fn from_config(client: Client, config: &AiServiceConfig) -> Option<Self> {
        config
            .base_url()
            .map(|url| Self::new(client, url, config.timeouts.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B, T>(&self, path: &str, body: &B, timeout: Duration) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {} (timeout {:?})", url, timeout);
        let request = self.client.post(&url).timeout(timeout).json(body);
        send_json(request, &url).await
    }
}

#[async_trait]
impl TextAnalyzer for RemoteAnalyzer {
    fn name(&self) -> &'static str {
        "ai-server"
    }

    async fn entities(&self, text: &str) -> Result<Vec<Entity>> {
        let body = NerRequest {
            text: text.to_string(),
            lang: Some("en".into()),
        };
        let resp: NerResponse = self.post("/ner", &body, self.timeouts.ner()).await?;
        Ok(resp.entities.into_iter().map(Entity::from).collect())
    }

    async fn summarize(&self, text: &str, max_sentences: usize) -> Result<String> {
        let body = SummarizeRequest {
            text: text.to_string(),
            max_sentences: Some(max_sentences),
            max_tokens: Some(SUMMARY_MAX_TOKENS),
        };
        let resp: SummarizeResponse = self
            .post("/summarize", &body, self.timeouts.summarize())
            .await?;
        Ok(resp.summary.trim().to_string())
    }

    async fn detect_language(&self, text: &str) -> Result<LanguageGuess> {
        let body = DetectRequest {
            text: text.to_string(),
        };
        let resp: DetectResponse = self.post("/detect", &body, self.timeouts.detect()).await?;
        Ok(resp.into())
    }

    async fn translate(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
    ) -> Result<String> {
        let body = TranslateRequest {
            text: text.to_string(),
            source_lang: source_lang.map(str::to_string),
            target_lang: Some(target_lang.to_string()),
        };
        let resp: TranslateResponse = self
            .post("/translate", &body, self.timeouts.translate())
            .await?;
        Ok(resp.translated)
    }

    async fn keywords(&self, text: &str, top_k: usize) -> Result<Vec<Keyword>> {
        let body = KeywordsRequest {
            text: text.to_string(),
            top_k: Some(top_k),
        };
        let resp: KeywordsResponse = self
            .post("/keywords", &body, self.timeouts.keywords())
            .await?;
        Ok(resp.keywords.into_iter().map(Keyword::from).collect())
    }
}
