mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::json;
use shortify::domain::entities::{NewShortUrl, ShortUrl};
use shortify::domain::repositories::ShortUrlRepository;
use shortify::error::AppError;
use shortify::state::AppState;
use shortify::utils::url_validator::HostPolicy;
use std::sync::Arc;

/// Store that fails every call.
struct UnavailableRepository;

fn unavailable() -> AppError {
    AppError::persistence(json!({ "reason": "connection refused" }))
}

#[async_trait]
impl ShortUrlRepository for UnavailableRepository {
    async fn find_by_short_code(&self, _code: &str) -> Result<Option<ShortUrl>, AppError> {
        Err(unavailable())
    }

    async fn find_by_original_url(&self, _url: &str) -> Result<Option<ShortUrl>, AppError> {
        Err(unavailable())
    }

    async fn insert(&self, _new: NewShortUrl) -> Result<ShortUrl, AppError> {
        Err(unavailable())
    }

    async fn increment_clicks(&self, _code: &str) -> Result<Option<i64>, AppError> {
        Err(unavailable())
    }

    async fn list_page(&self, _offset: i64, _limit: i64) -> Result<(Vec<ShortUrl>, i64), AppError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unavailable())
    }
}

fn unavailable_state() -> AppState {
    AppState::new(
        Arc::new(UnavailableRepository),
        Arc::new(common::StubProbe::reachable()),
        HostPolicy::default(),
        common::BASE_URL,
    )
}

#[tokio::test]
async fn test_health_ok() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_degraded_when_store_down() {
    let server = common::create_test_server(unavailable_state());

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let server = common::create_test_server(unavailable_state());

    let response = server
        .post("/api/urls/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "persistence_error");
    assert_eq!(
        json["error"]["message"],
        "Unable to save the shortened URL. Please try again later."
    );
}
