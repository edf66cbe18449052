//! Backend API Integration Tests
//!
//! Tests for the Axum HTTP endpoints using Router::oneshot pattern.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use backend::api::{self, AppState};
use chess_brain::{LearningAgent, SnapshotStore};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

const FOOLS_MATE: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";

/// Helper to create a test router backed by a snapshot in a temp dir
fn test_router() -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let agent = LearningAgent::load(SnapshotStore::new(dir.path().join("ai_brain.json")));
    (api::router(AppState::new(agent)), dir)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health_reports_defaults() {
    let (app, _dir) = test_router();

    let (status, body) = send(&app, "GET", "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["games_learned"], 0);
    assert_eq!(body["difficulty"], "intermediate");
    assert_eq!(body["personality"], "balanced");
}

#[tokio::test]
async fn test_move_from_start_position() {
    let (app, _dir) = test_router();

    let (status, body) = send(&app, "POST", "/api/game/move", Some(json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["move"].as_str().unwrap().len(), 4);
    assert!(body["fen"].as_str().unwrap().contains(" b "));
    assert!(body["evaluation"].is_number());
}

#[tokio::test]
async fn test_move_updates_settings() {
    let (app, _dir) = test_router();

    let (status, _) = send(
        &app,
        "POST",
        "/api/game/move",
        Some(json!({"personality": "defensive", "difficulty": "expert"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, health) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(health["personality"], "defensive");
    assert_eq!(health["difficulty"], "expert");
}

#[tokio::test]
async fn test_move_on_checkmate_is_rejected() {
    let (app, _dir) = test_router();

    let request = json!({"fen": FOOLS_MATE});
    let (status, body) = send(&app, "POST", "/api/game/move", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No legal moves available");
}

#[tokio::test]
async fn test_move_with_invalid_fen_is_rejected() {
    let (app, _dir) = test_router();

    let request = json!({"fen": "garbage"});
    let (status, body) = send(&app, "POST", "/api/game/move", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid position"));
}

#[tokio::test]
async fn test_move_with_unknown_personality_is_rejected() {
    let (app, _dir) = test_router();

    let (status, body) = send(
        &app,
        "POST",
        "/api/game/move",
        Some(json!({"personality": "reckless"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("reckless"));
}

#[tokio::test]
async fn test_chat_greeting() {
    let (app, _dir) = test_router();

    let request = json!({"message": "hello there"});
    let (status, body) = send(&app, "POST", "/api/chat", Some(request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["games_learned"], 0);
    let response = body["response"].as_str().unwrap();
    assert!(response.contains("Hello"));
    assert!(response.contains('0'));
}

#[tokio::test]
async fn test_learn_then_stats() {
    let (app, dir) = test_router();

    let game = json!({"game_id": "g1", "moves": ["e4", "e5", "Nf3"], "result": "ai_win"});
    let (status, body) = send(&app, "POST", "/api/learn", Some(json!({ "gameData": game }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["games_learned"], 1);
    assert_eq!(body["current_difficulty"], "intermediate");
    assert!(dir.path().join("ai_brain.json").exists());

    let (status, stats) = send(&app, "GET", "/api/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["games_played"], 1);
    assert_eq!(stats["positions_learned"], 2);
    assert_eq!(stats["recent_results"][0]["game_id"], "g1");
    assert_eq!(stats["recent_results"][0]["result"], "ai_win");

    let (_, again) = send(&app, "GET", "/api/stats", None).await;
    assert_eq!(stats, again);
}

#[tokio::test]
async fn test_learned_move_is_played_back() {
    let (app, _dir) = test_router();

    send(
        &app,
        "POST",
        "/api/learn",
        Some(json!({"gameData": {"moves": ["h3"], "result": "draw"}})),
    )
    .await;

    let (status, body) = send(&app, "POST", "/api/game/move", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["move"], "h2h3");
}

#[tokio::test]
async fn test_learn_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ai_brain.json");
    // A directory in place of the snapshot file makes every save fail
    std::fs::create_dir_all(&path).unwrap();
    let app = api::router(AppState::new(LearningAgent::load(SnapshotStore::new(&path))));

    let (status, body) = send(&app, "POST", "/api/learn", Some(json!({"gameData": {}}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("error").is_some());

    // What was learned is still in memory
    let (_, stats) = send(&app, "GET", "/api/stats", None).await;
    assert_eq!(stats["games_played"], 1);
}

/// Send a raw body with a JSON content type
async fn send_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).expect("Error body should be JSON");
    (status, body)
}

#[tokio::test]
async fn test_wrong_shape_body_returns_json_error() {
    let (app, _dir) = test_router();

    let (status, body) = send_raw(&app, "/api/learn", r#"{"gameData": {"moves": "e4"}}"#).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());

    // Nothing was learned
    let (_, stats) = send(&app, "GET", "/api/stats", None).await;
    assert_eq!(stats["games_played"], 0);
}

#[tokio::test]
async fn test_null_game_data_returns_json_error() {
    let (app, _dir) = test_router();

    let (status, body) = send_raw(&app, "/api/learn", r#"{"gameData": null}"#).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_unparseable_body_returns_json_error() {
    let (app, _dir) = test_router();

    for uri in ["/api/learn", "/api/chat", "/api/game/move"] {
        let (status, body) = send_raw(&app, uri, "not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(body["error"].is_string(), "{}", uri);
    }
}

#[tokio::test]
async fn test_missing_content_type_returns_json_error() {
    let (app, _dir) = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chat")
                .body(Body::from(r#"{"message": "hi"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}
