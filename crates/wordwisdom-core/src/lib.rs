//! WordWisdom Core: error type, configuration, curated vocabulary.

pub mod config;
pub mod error;
pub mod words;

pub use config::{AiServiceConfig, AiTimeouts, OpenAiConfig, WordWisdomConfig};
pub use error::{Error, Result};
pub use words::{CuratedWord, CURATED_WORDS};
