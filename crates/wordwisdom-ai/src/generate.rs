//! Insight generation: AI server, then an OpenAI-compatible chat
//! completion, then a local template.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info, warn};
use wordwisdom_core::{AiServiceConfig, AiTimeouts, Error, OpenAiConfig, Result};

use crate::http::send_json;
use crate::wire::{GenerateRequest, GenerateResponse};

/// Longest insight the template produces, in characters.
pub const MAX_INSIGHT_CHARS: usize = 300;

const SYSTEM_PROMPT: &str = "You are a concise, insightful public intellectual.";
const OPENAI_ATTEMPTS: usize = 2;
const OPENAI_RETRY_DELAY: Duration = Duration::from_millis(200);
const OPENAI_TEMPERATURE: f64 = 0.8;
const OPENAI_MAX_TOKENS: usize = 160;

/// Which stage produced the insight text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContentSource {
    #[serde(rename = "ai_server")]
    AiServer,
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "template")]
    Template,
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentSource::AiServer => write!(f, "ai_server"),
            ContentSource::OpenAi => write!(f, "openai"),
            ContentSource::Template => write!(f, "template"),
        }
    }
}

/// Generated insight text and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedContent {
    pub content: String,
    pub source: ContentSource,
}

/// Produces a one- or two-sentence insight for a word and topic.
#[derive(Debug, Clone)]
pub struct InsightGenerator {
    client: Client,
    ai_base_url: Option<String>,
    timeouts: AiTimeouts,
    openai: OpenAiConfig,
}

impl InsightGenerator {
    pub fn new(client: Client, config: &AiServiceConfig) -> Self {
        Self {
            client,
            ai_base_url: config.base_url().map(str::to_string),
            timeouts: config.timeouts.clone(),
            openai: config.openai.clone(),
        }
    }

    /// Template only; no network.
    pub fn offline() -> Self {
        Self::new(Client::new(), &AiServiceConfig::default())
    }

    /// Generate an insight. Never fails: the template is the last resort.
    pub async fn generate(&self, word: &str, topic: &str, tone: Option<&str>) -> GeneratedContent {
        if let Some(base) = &self.ai_base_url {
            match self.generate_remote(base, word, topic, tone).await {
                Ok(content) => {
                    return GeneratedContent {
                        content,
                        source: ContentSource::AiServer,
                    }
                }
                Err(e) => warn!("AI server generation failed: {}", e),
            }
        }

        if self.openai.is_configured() {
            match self.generate_openai(word, topic, tone).await {
                Ok(content) => {
                    return GeneratedContent {
                        content,
                        source: ContentSource::OpenAi,
                    }
                }
                Err(e) => warn!("OpenAI generation failed: {}", e),
            }
        }

        info!("Composing template insight for '{}'", word);
        GeneratedContent {
            content: compose_template(word, topic, tone),
            source: ContentSource::Template,
        }
    }

    async fn generate_remote(
        &self,
        base: &str,
        word: &str,
        topic: &str,
        tone: Option<&str>,
    ) -> Result<String> {
        let url = format!("{}/generate", base);
        let body = GenerateRequest {
            word: word.to_string(),
            topic: topic.to_string(),
            tone: tone.map(str::to_string),
        };
        debug!("POST {}", url);
        let request = self
            .client
            .post(&url)
            .timeout(self.timeouts.generate())
            .json(&body);
        let resp: GenerateResponse = send_json(request, &url).await?;
        non_empty(resp.content, &url)
    }

    async fn generate_openai(&self, word: &str, topic: &str, tone: Option<&str>) -> Result<String> {
        let api_key = self.openai.api_key.as_deref().unwrap_or_default();
        let body = json!({
            "model": self.openai.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": build_prompt(word, topic, tone)},
            ],
            "temperature": OPENAI_TEMPERATURE,
            "max_tokens": OPENAI_MAX_TOKENS,
        });

        let mut last_err = Error::Internal("no OpenAI attempt made".into());
        for attempt in 1..=OPENAI_ATTEMPTS {
            if attempt > 1 {
                tokio::time::sleep(OPENAI_RETRY_DELAY).await;
            }
            debug!("OpenAI completion attempt {} with model {}", attempt, self.openai.model);

            let request = self
                .client
                .post(&self.openai.endpoint)
                .header("Authorization", format!("Bearer {}", api_key))
                .timeout(self.timeouts.generate())
                .json(&body);

            match send_json::<serde_json::Value>(request, &self.openai.endpoint).await {
                Ok(parsed) => {
                    let content = parsed["choices"][0]["message"]["content"]
                        .as_str()
                        .unwrap_or_default()
                        .to_string();
                    return non_empty(content, &self.openai.endpoint);
                }
                Err(e) => last_err = e,
            }
        }
        Err(last_err)
    }
}

fn non_empty(content: String, what: &str) -> Result<String> {
    let content = content.trim();
    if content.is_empty() {
        return Err(Error::Payload(format!("{}: empty content", what)));
    }
    Ok(content.to_string())
}

/// User prompt for the chat completion.
pub fn build_prompt(word: &str, topic: &str, tone: Option<&str>) -> String {
    let tone_text = clean_tone(tone)
        .map(|t| format!(": tone {}", t.to_lowercase()))
        .unwrap_or_default();
    format!(
        "Compose one profound, shareable insight using the word '{}' about '{}'{}.\n\
         Constraints: 1-2 elegant sentences, 300 characters max. No hashtags, no emojis, \
         no quotes around the text. Be original and clear.",
        word, topic, tone_text
    )
}

/// Offline insight: `"{Word} reframes {topic} as a lived tension ..."`.
pub fn compose_template(word: &str, topic: &str, tone: Option<&str>) -> String {
    let tone_text = clean_tone(tone)
        .map(|t| format!(" in a {} tone", t))
        .unwrap_or_default();
    let content = format!(
        "{} reframes {} as a lived tension between what is and what could be{}.",
        capitalize(word.trim()),
        topic.trim(),
        tone_text
    );
    content.chars().take(MAX_INSIGHT_CHARS).collect()
}

fn clean_tone(tone: Option<&str>) -> Option<&str> {
    tone.map(str::trim).filter(|t| !t.is_empty())
}

/// First char uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_template() {
        assert_eq!(
            compose_template("hegemony", "media", Some("critical")),
            "Hegemony reframes media as a lived tension between what is and what could be in a critical tone."
        );
        assert_eq!(
            compose_template("PRAXIS", " labor rights ", Some("  ")),
            "Praxis reframes labor rights as a lived tension between what is and what could be."
        );
    }

    #[test]
    fn test_template_capped() {
        let topic = "x".repeat(500);
        assert_eq!(compose_template("a", &topic, None).chars().count(), MAX_INSIGHT_CHARS);
    }

    #[test]
    fn test_build_prompt_lowercases_tone() {
        let prompt = build_prompt("arete", "ancient philosophy", Some("Reflective"));
        assert!(prompt.starts_with(
            "Compose one profound, shareable insight using the word 'arete' about 'ancient philosophy': tone reflective.\n"
        ));
        assert!(prompt.contains("300 characters max"));
        assert!(!build_prompt("arete", "x", None).contains("tone"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("zEITGEIST"), "Zeitgeist");
    }

    #[tokio::test]
    async fn test_offline_uses_template() {
        let generated = InsightGenerator::offline()
            .generate("anomie", "labor rights", None)
            .await;
        assert_eq!(generated.source, ContentSource::Template);
        assert!(generated.content.starts_with("Anomie reframes labor rights"));
    }
}
