//! Curated vocabulary routes.

use std::sync::Arc;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use wordwisdom_core::words;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/words", get(list_words))
        .route("/words/{word}", get(get_word))
}

/// GET /api/words
async fn list_words() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "data": words::CURATED_WORDS }))
}

/// GET /api/words/{word}
async fn get_word(Path(word): Path<String>) -> impl IntoResponse {
    match words::lookup(&word) {
        Some(entry) => (StatusCode::OK, Json(serde_json::json!(entry))),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("Unknown word: {}", word) })),
        ),
    }
}
