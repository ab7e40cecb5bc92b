//! AI server wire protocol: JSON bodies for `/generate`, `/ner`,
//! `/summarize`, `/detect`, `/translate` and `/keywords`.
//!
//! Shared by the HTTP client in `remote` and the server routes that speak
//! the same protocol.

use serde::{Deserialize, Serialize};
use wordwisdom_analyze::{Entity, EntityLabel, Keyword, LanguageGuess};

/// `max_tokens` the client asks the summarizer for.
pub const SUMMARY_MAX_TOKENS: usize = 128;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub word: String,
    pub topic: String,
    #[serde(default)]
    pub tone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NerRequest {
    pub text: String,
    #[serde(default)]
    pub lang: Option<String>,
}

/// Entity as it travels over the wire. Missing fields default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireEntity {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub start: usize,
    #[serde(default)]
    pub end: usize,
}

impl From<WireEntity> for Entity {
    fn from(e: WireEntity) -> Self {
        Entity {
            text: e.text,
            label: EntityLabel::from(e.label),
            start: e.start,
            end: e.end,
        }
    }
}

impl From<Entity> for WireEntity {
    fn from(e: Entity) -> Self {
        WireEntity {
            text: e.text,
            label: e.label.into(),
            start: e.start,
            end: e.end,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NerResponse {
    pub entities: Vec<WireEntity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default)]
    pub max_sentences: Option<usize>,
    #[serde(default)]
    pub max_tokens: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectResponse {
    pub lang: String,
    #[serde(default)]
    pub confidence: f64,
}

impl From<DetectResponse> for LanguageGuess {
    fn from(r: DetectResponse) -> Self {
        LanguageGuess::new(r.lang, r.confidence)
    }
}

impl From<LanguageGuess> for DetectResponse {
    fn from(g: LanguageGuess) -> Self {
        DetectResponse {
            lang: g.lang,
            confidence: g.confidence,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    #[serde(default)]
    pub source_lang: Option<String>,
    #[serde(default)]
    pub target_lang: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordsRequest {
    pub text: String,
    #[serde(default)]
    pub top_k: Option<usize>,
}

/// Keyword as it travels over the wire. Missing fields default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireKeyword {
    #[serde(default)]
    pub phrase: String,
    #[serde(default)]
    pub score: f64,
}

impl From<WireKeyword> for Keyword {
    fn from(k: WireKeyword) -> Self {
        Keyword {
            phrase: k.phrase,
            score: k.score,
        }
    }
}

impl From<Keyword> for WireKeyword {
    fn from(k: Keyword) -> Self {
        WireKeyword {
            phrase: k.phrase,
            score: k.score,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<WireKeyword>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_inner_fields_default() {
        let resp: NerResponse =
            serde_json::from_str(r#"{"entities": [{"text": "Athens", "label": "GPE"}]}"#).unwrap();
        let entity: Entity = resp.entities[0].clone().into();
        assert_eq!(entity.label, EntityLabel::Other("GPE".into()));
        assert_eq!((entity.start, entity.end), (0, 0));
    }

    #[test]
    fn test_missing_top_level_field_rejected() {
        assert!(serde_json::from_str::<NerResponse>(r#"{"ents": []}"#).is_err());
        assert!(serde_json::from_str::<SummarizeResponse>("{}").is_err());
        assert!(serde_json::from_str::<DetectResponse>(r#"{"confidence": 0.9}"#).is_err());
    }

    #[test]
    fn test_detect_confidence_defaults() {
        let resp: DetectResponse = serde_json::from_str(r#"{"lang": "fr"}"#).unwrap();
        let guess: LanguageGuess = resp.into();
        assert_eq!(guess, LanguageGuess::new("fr", 0.0));
    }

    #[test]
    fn test_request_optionals() {
        let req: KeywordsRequest = serde_json::from_str(r#"{"text": "abc"}"#).unwrap();
        assert!(req.top_k.is_none());
        let req: TranslateRequest =
            serde_json::from_str(r#"{"text": "hola", "source_lang": null}"#).unwrap();
        assert!(req.source_lang.is_none());
        assert!(req.target_lang.is_none());
    }
}
