//! Response shapes of the HTTP API, exercised through the router with no
//! AI server or OpenAI key configured.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use wordwisdom_core::WordWisdomConfig;
use wordwisdom_server::{build_router, AppState};

fn app() -> Router {
    build_router(Arc::new(AppState::new(WordWisdomConfig::default())))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn test_health_shape() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "remote": false, "openai": false}));
}

#[tokio::test]
async fn test_ner_shape() {
    let (status, body) = post(
        "/ner",
        json!({"text": "Visit https://example.com in 2024 with Alice Smith."}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let entities = body["entities"].as_array().unwrap();
    let labels: Vec<&str> = entities.iter().map(|e| e["label"].as_str().unwrap()).collect();
    assert_eq!(labels, vec!["PROPN", "URL", "DATE", "PROPN"]);
    assert_eq!(entities[1]["text"], "https://example.com");
    assert_eq!(entities[1]["start"], 6);
    assert_eq!(entities[1]["end"], 25);
    assert_eq!(entities[3]["text"], "Alice Smith");

    let (_, body) = post("/ner", json!({"text": "   "})).await;
    assert_eq!(body, json!({"entities": []}));
}

#[tokio::test]
async fn test_summarize_defaults() {
    let text = "First point. Second point! Third point?";
    let (status, body) = post("/summarize", json!({"text": text})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], "First point. Second point!");

    let (_, body) = post("/summarize", json!({"text": text, "max_sentences": 0})).await;
    assert_eq!(body["summary"], "First point. Second point!");

    let (_, body) = post("/summarize", json!({"text": text, "max_sentences": 1, "max_tokens": 5})).await;
    assert_eq!(body["summary"], "First point.");
}

#[tokio::test]
async fn test_detect_shape() {
    let (_, body) = post("/detect", json!({"text": "Καλημέρα κόσμε"})).await;
    assert_eq!(body, json!({"lang": "non-en", "confidence": 0.3}));

    let (_, body) = post("/detect", json!({"text": ""})).await;
    assert_eq!(body, json!({"lang": "und", "confidence": 0.0}));
}

#[tokio::test]
async fn test_translate_passes_text_through() {
    let (status, body) = post(
        "/translate",
        json!({"text": "Bonjour le monde", "source_lang": "fr", "target_lang": "en"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"translated": "Bonjour le monde"}));

    let (_, body) = post("/translate", json!({"text": "hola"})).await;
    assert_eq!(body["translated"], "hola");
}

#[tokio::test]
async fn test_keywords_shape() {
    let text = "alpha beta gamma delta epsilon zeta theta iota kappa lambda alpha";
    let (_, body) = post("/keywords", json!({"text": text, "top_k": 2})).await;
    assert_eq!(
        body,
        json!({"keywords": [{"phrase": "alpha", "score": 2.0}, {"phrase": "beta", "score": 1.0}]})
    );

    // Zero or missing top_k means the default of eight.
    let (_, body) = post("/keywords", json!({"text": text, "top_k": 0})).await;
    assert_eq!(body["keywords"].as_array().unwrap().len(), 8);
    let (_, body) = post("/keywords", json!({"text": text})).await;
    assert_eq!(body["keywords"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_generate_template() {
    let (status, body) = post(
        "/generate",
        json!({"word": "palimpsest", "topic": "cities", "tone": "wistful"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["content"],
        "Palimpsest reframes cities as a lived tension between what is and what could be in a wistful tone."
    );
}

#[tokio::test]
async fn test_insight_shape() {
    let (status, body) = post(
        "/api/insights/generate",
        json!({
            "word": "pluralism",
            "topic": "Open Societies",
            "tone": "hopeful",
            "enable_ner": true,
            "enable_summary": true,
            "enable_keywords": true,
            "enable_translation": true
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["word"], "pluralism");
    assert_eq!(body["topic"], "Open Societies");
    assert_eq!(body["tone"], "hopeful");
    assert_eq!(body["content_source"], "template");
    assert!(body["content"].as_str().unwrap().starts_with("Pluralism reframes Open Societies"));
    assert_eq!(body["translated"], body["content"]);
    assert_eq!(body["target_lang"], "en");
    assert_eq!(body["language"], json!({"lang": "en", "confidence": 0.3}));
    assert!(body["entities"].is_array());
    assert!(body["summary"].is_string());
    assert!(body["keywords"].is_array());
    assert_eq!(body["wisdomChain"], json!(["pluralism"]));
}

#[tokio::test]
async fn test_insight_toggles_off() {
    let (status, body) = post(
        "/api/insights/generate",
        json!({"word": "anomie", "article": "Factories closed. Towns emptied."}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["topic"], "");
    assert_eq!(body["entities"], json!([]));
    assert_eq!(body["summary"], Value::Null);
    assert_eq!(body["keywords"], json!([]));
    assert_eq!(body["language"], json!({"lang": "en", "confidence": 0.0}));
    assert_eq!(body["wisdomChain"], json!([]));
}

#[tokio::test]
async fn test_insight_validation_is_422() {
    let (status, body) = post("/api/insights/generate", json!({"topic": "x"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("word"));

    let (status, _) = post("/api/insights/generate", json!({"word": "praxis"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = post(
        "/api/insights/generate",
        json!({"word": "praxis", "topic": "x", "target_lang": "eng"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_words() {
    let (status, body) = get("/api/words").await;
    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 15);
    assert_eq!(data[0]["word"], "catharsis");
    assert!(data[0]["definition"].is_string());

    let (status, body) = get("/api/words/Praxis").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word"], "praxis");

    let (status, _) = get("/api/words/hubris").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
