#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use quandary_ai::{AiClient, AiConfig, AiError, TextProvider};
use quandary_api::config::ServerConfig;
use quandary_api::router::build_app_router;
use quandary_api::state::AppState;
use quandary_core::achievements::ACHIEVEMENT_CATALOG;
use quandary_db::repositories::AchievementRepo;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults and no providers.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5000".to_string()],
        request_timeout_secs: 30,
        database_path: PathBuf::from(":memory:"),
        ai: AiConfig::default(),
    }
}

/// Build the full application router with providers disabled.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with_ai(pool, AiClient::disabled())
}

/// Build the full application router around the given text providers.
pub fn build_test_app_with_ai(pool: SqlitePool, ai: AiClient) -> Router {
    build_test_app_with_config(pool, test_config(), ai)
}

/// Build the full application router from an explicit config.
///
/// Uses the same middleware stack and provider deadline as production.
pub fn build_test_app_with_config(pool: SqlitePool, config: ServerConfig, ai: AiClient) -> Router {
    let state = AppState {
        pool,
        ai: Arc::new(ai.with_deadline(config.provider_deadline())),
    };
    build_app_router(state, &config)
}

/// Seed the achievement catalog the way the binary does at startup.
pub async fn seed_catalog(pool: &SqlitePool) {
    AchievementRepo::seed_catalog(pool, &ACHIEVEMENT_CATALOG)
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Fake text provider
// ---------------------------------------------------------------------------

/// Always replies with the same text.
pub struct FixedProvider(pub &'static str);

#[async_trait]
impl TextProvider for FixedProvider {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, AiError> {
        Ok(self.0.to_string())
    }
}

pub fn fixed_ai(reply: &'static str) -> AiClient {
    let provider: Arc<dyn TextProvider> = Arc::new(FixedProvider(reply));
    AiClient::new(vec![provider])
}

/// Sleeps, then fails: an unreachable provider.
pub struct StalledProvider(pub Duration);

#[async_trait]
impl TextProvider for StalledProvider {
    fn name(&self) -> &'static str {
        "stalled"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, AiError> {
        tokio::time::sleep(self.0).await;
        Err(AiError::EmptyResponse("stalled"))
    }
}

/// Two stalled providers, each taking `delay` before failing.
pub fn stalled_ai(delay: Duration) -> AiClient {
    let primary: Arc<dyn TextProvider> = Arc::new(StalledProvider(delay));
    let alternate: Arc<dyn TextProvider> = Arc::new(StalledProvider(delay));
    AiClient::new(vec![primary, alternate])
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, &body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Start a game and return its id.
pub async fn start_game(pool: &SqlitePool, player_name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/start_game",
        serde_json::json!({ "player_name": player_name }),
    )
    .await;
    body_json(response).await["game_id"].as_i64().unwrap()
}

/// Record one decision through the HTTP surface.
pub async fn decide(
    pool: &SqlitePool,
    game_id: i64,
    framework: &str,
    category: &str,
) -> serde_json::Value {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/make_decision",
        serde_json::json!({
            "game_id": game_id,
            "dilemma_id": 1,
            "dilemma_text": "A runaway trolley is heading towards five people.",
            "dilemma_category": category,
            "chosen_option": "Pull the lever",
            "ethical_framework": framework,
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await
}
