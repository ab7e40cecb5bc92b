//! Shared application state.

use std::sync::Arc;

use wordwisdom_ai::InsightPipeline;
use wordwisdom_analyze::{HeuristicAnalyzer, TextAnalyzer};
use wordwisdom_core::WordWisdomConfig;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: WordWisdomConfig,
    /// Answers the AI-server-compatible endpoints.
    pub analyzer: Arc<dyn TextAnalyzer>,
    /// Generation and enrichment for `/api/insights`.
    pub pipeline: InsightPipeline,
}

impl AppState {
    pub fn new(config: WordWisdomConfig) -> Self {
        let pipeline = InsightPipeline::from_config(&config.ai);
        Self {
            config,
            analyzer: Arc::new(HeuristicAnalyzer),
            pipeline,
        }
    }

    /// Whether an external AI server is configured.
    pub fn has_remote(&self) -> bool {
        self.pipeline.analyzer().has_primary()
    }

    pub fn has_openai(&self) -> bool {
        self.config.ai.openai.is_configured()
    }
}
