//! AI-server-compatible endpoints answered locally.
//!
//! Same request and response bodies as the external AI server, so a
//! WordWisdom instance can stand in as another instance's `AI_SERVER_URL`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use wordwisdom_ai::generate::compose_template;
use wordwisdom_ai::wire::*;
use wordwisdom_analyze::heuristic::{DEFAULT_MAX_SENTENCES, DEFAULT_TARGET_LANG, DEFAULT_TOP_K};

use super::error_response;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate", post(generate))
        .route("/ner", post(ner))
        .route("/summarize", post(summarize))
        .route("/detect", post(detect))
        .route("/translate", post(translate))
        .route("/keywords", post(keywords))
}

/// POST /generate
async fn generate(Json(req): Json<GenerateRequest>) -> Json<GenerateResponse> {
    Json(GenerateResponse {
        content: compose_template(&req.word, &req.topic, req.tone.as_deref()),
    })
}

/// POST /ner
async fn ner(State(state): State<Arc<AppState>>, Json(req): Json<NerRequest>) -> Response {
    match state.analyzer.entities(&req.text).await {
        Ok(entities) => Json(NerResponse {
            entities: entities.into_iter().map(WireEntity::from).collect(),
        })
        .into_response(),
        Err(e) => error_response(&e).into_response(),
    }
}

/// POST /summarize
async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SummarizeRequest>,
) -> Response {
    let max_sentences = req
        .max_sentences
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_MAX_SENTENCES);
    match state.analyzer.summarize(&req.text, max_sentences).await {
        Ok(summary) => Json(SummarizeResponse { summary }).into_response(),
        Err(e) => error_response(&e).into_response(),
    }
}

/// POST /detect
async fn detect(State(state): State<Arc<AppState>>, Json(req): Json<DetectRequest>) -> Response {
    match state.analyzer.detect_language(&req.text).await {
        Ok(guess) => Json(DetectResponse::from(guess)).into_response(),
        Err(e) => error_response(&e).into_response(),
    }
}

/// POST /translate
async fn translate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TranslateRequest>,
) -> Response {
    let target = req.target_lang.as_deref().unwrap_or(DEFAULT_TARGET_LANG);
    match state
        .analyzer
        .translate(&req.text, req.source_lang.as_deref(), target)
        .await
    {
        Ok(translated) => Json(TranslateResponse { translated }).into_response(),
        Err(e) => error_response(&e).into_response(),
    }
}

/// POST /keywords
async fn keywords(
    State(state): State<Arc<AppState>>,
    Json(req): Json<KeywordsRequest>,
) -> impl IntoResponse {
    let top_k = req.top_k.filter(|k| *k > 0).unwrap_or(DEFAULT_TOP_K);
    match state.analyzer.keywords(&req.text, top_k).await {
        Ok(keywords) => (
            StatusCode::OK,
            Json(KeywordsResponse {
                keywords: keywords.into_iter().map(WireKeyword::from).collect(),
            }),
        )
            .into_response(),
        Err(e) => error_response(&e).into_response(),
    }
}
