//! Analysis result types shared by the heuristic and remote analyzers.

use serde::{Deserialize, Serialize};

/// Entity label. The heuristic only produces `Url`, `Date` and `Propn`;
/// labels from a remote extractor (PERSON, GPE, ...) are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityLabel {
    Url,
    Date,
    Propn,
    Other(String),
}

impl EntityLabel {
    pub fn as_str(&self) -> &str {
        match self {
            EntityLabel::Url => "URL",
            EntityLabel::Date => "DATE",
            EntityLabel::Propn => "PROPN",
            EntityLabel::Other(label) => label,
        }
    }
}

impl From<String> for EntityLabel {
    fn from(label: String) -> Self {
        match label.as_str() {
            "URL" => EntityLabel::Url,
            "DATE" => EntityLabel::Date,
            "PROPN" => EntityLabel::Propn,
            _ => EntityLabel::Other(label),
        }
    }
}

impl From<EntityLabel> for String {
    fn from(label: EntityLabel) -> Self {
        match label {
            EntityLabel::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled span of the analyzed text.
///
/// `start`/`end` are codepoint offsets into the text exactly as it was
/// passed in; `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

impl Entity {
    /// Span length in codepoints.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A candidate keyword and its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub phrase: String,
    pub score: f64,
}

/// Detected language with a confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageGuess {
    pub lang: String,
    pub confidence: f64,
}

impl LanguageGuess {
    pub const UNDETERMINED: &'static str = "und";

    pub fn new(lang: impl Into<String>, confidence: f64) -> Self {
        Self {
            lang: lang.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// `{lang: "und", confidence: 0.0}`.
    pub fn undetermined() -> Self {
        Self::new(Self::UNDETERMINED, 0.0)
    }

    /// Whether the guessed language equals `lang` (case-insensitive).
    pub fn is(&self, lang: &str) -> bool {
        self.lang.eq_ignore_ascii_case(lang)
    }
}
