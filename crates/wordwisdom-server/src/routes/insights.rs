//! Insight generation route.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;
use wordwisdom_ai::InsightRequest;

use super::error_response;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/insights/generate", post(generate_insight))
}

/// POST /api/insights/generate: generate and enrich an insight.
async fn generate_insight(
    State(state): State<Arc<AppState>>,
    Json(req): Json<InsightRequest>,
) -> impl IntoResponse {
    match state.pipeline.run(&req).await {
        Ok(insight) => {
            info!(
                "Insight for '{}' from {} ({} keywords)",
                insight.word,
                insight.content_source,
                insight.keywords.len()
            );
            (StatusCode::OK, Json(serde_json::json!(insight)))
        }
        Err(e) => error_response(&e),
    }
}
