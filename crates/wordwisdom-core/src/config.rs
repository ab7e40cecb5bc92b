//! Configuration for the server and the AI orchestration layer.
//!
//! Built once at startup and handed to constructors; nothing below reads
//! the environment after that.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Top-level WordWisdom configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordWisdomConfig {
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Remote AI services.
    #[serde(default)]
    pub ai: AiServiceConfig,
}

/// Remote AI server and LLM settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiServiceConfig {
    /// Base URL of the AI server (`/ner`, `/summarize`, ...). `None` disables it.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub timeouts: AiTimeouts,
    #[serde(default)]
    pub openai: OpenAiConfig,
}

/// Per-operation request timeouts, in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiTimeouts {
    #[serde(default = "default_generate_secs")]
    pub generate: u64,
    #[serde(default = "default_ner_secs")]
    pub ner: u64,
    #[serde(default = "default_summarize_secs")]
    pub summarize: u64,
    #[serde(default = "default_detect_secs")]
    pub detect: u64,
    #[serde(default = "default_translate_secs")]
    pub translate: u64,
    #[serde(default = "default_keywords_secs")]
    pub keywords: u64,
}

/// OpenAI-compatible chat completion settings used for insight generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_openai_model")]
    pub model: String,
    #[serde(default = "default_openai_endpoint")]
    pub endpoint: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_generate_secs() -> u64 {
    10
}
fn default_ner_secs() -> u64 {
    10
}
fn default_summarize_secs() -> u64 {
    15
}
fn default_detect_secs() -> u64 {
    8
}
fn default_translate_secs() -> u64 {
    15
}
fn default_keywords_secs() -> u64 {
    15
}
fn default_openai_model() -> String {
    DEFAULT_OPENAI_MODEL.into()
}
fn default_openai_endpoint() -> String {
    DEFAULT_OPENAI_ENDPOINT.into()
}

impl Default for WordWisdomConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            ai: AiServiceConfig::default(),
        }
    }
}

impl Default for AiTimeouts {
    fn default() -> Self {
        Self {
            generate: default_generate_secs(),
            ner: default_ner_secs(),
            summarize: default_summarize_secs(),
            detect: default_detect_secs(),
            translate: default_translate_secs(),
            keywords: default_keywords_secs(),
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_openai_model(),
            endpoint: default_openai_endpoint(),
        }
    }
}

impl AiTimeouts {
    pub fn generate(&self) -> Duration {
        Duration::from_secs(self.generate)
    }
    pub fn ner(&self) -> Duration {
        Duration::from_secs(self.ner)
    }
    pub fn summarize(&self) -> Duration {
        Duration::from_secs(self.summarize)
    }
    pub fn detect(&self) -> Duration {
        Duration::from_secs(self.detect)
    }
    pub fn translate(&self) -> Duration {
        Duration::from_secs(self.translate)
    }
    pub fn keywords(&self) -> Duration {
        Duration::from_secs(self.keywords)
    }
}

impl AiServiceConfig {
    /// Config pointing at an AI server, everything else default.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            ..Self::default()
        }
    }

    /// The AI server base URL without a trailing slash, if configured.
    pub fn base_url(&self) -> Option<&str> {
        self.endpoint
            .as_deref()
            .map(|e| e.trim().trim_end_matches('/'))
            .filter(|e| !e.is_empty())
    }
}

impl OpenAiConfig {
    /// Whether an API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

impl WordWisdomConfig {
    /// Create configuration from process environment and defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = non_empty("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let openai = OpenAiConfig {
            api_key: non_empty("OPENAI_API_KEY"),
            model: non_empty("OPENAI_MODEL").unwrap_or_else(default_openai_model),
            endpoint: non_empty("OPENAI_ENDPOINT").unwrap_or_else(default_openai_endpoint),
        };

        let config = Self {
            port,
            ai: AiServiceConfig {
                endpoint: non_empty("AI_SERVER_URL"),
                timeouts: AiTimeouts::default(),
                openai,
            },
        };

        info!(
            "Config: port={}, ai_server={}, openai={}",
            config.port,
            config.ai.base_url().unwrap_or("(none)"),
            if config.ai.openai.is_configured() { "configured" } else { "off" },
        );

        config
    }
}
