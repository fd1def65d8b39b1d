#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use shortify::domain::entities::ShortUrl;
use shortify::domain::probe::{ProbeOutcome, ReachabilityProbe};
use shortify::infrastructure::persistence::InMemoryShortUrlRepository;
use shortify::api::middleware::cors;
use shortify::routes::app_router;
use shortify::state::AppState;
use shortify::utils::url_validator::HostPolicy;
use std::sync::Arc;

pub const BASE_URL: &str = "http://localhost:3000";

/// Probe answering every URL with a fixed outcome.
pub struct StubProbe {
    outcome: ProbeOutcome,
}

impl StubProbe {
    pub fn reachable() -> Self {
        Self {
            outcome: ProbeOutcome::Reachable { status: 200 },
        }
    }

    pub fn unreachable(reason: &str) -> Self {
        Self {
            outcome: ProbeOutcome::Unreachable {
                reason: reason.to_string(),
            },
        }
    }
}

#[async_trait]
impl ReachabilityProbe for StubProbe {
    async fn probe(&self, _url: &str) -> ProbeOutcome {
        self.outcome.clone()
    }
}

pub fn create_test_state() -> AppState {
    create_state_with_probe(StubProbe::reachable())
}

pub fn create_state_with_probe(probe: StubProbe) -> AppState {
    AppState::new(
        Arc::new(InMemoryShortUrlRepository::new()),
        Arc::new(probe),
        HostPolicy::default(),
        BASE_URL,
    )
}

/// Serves the full application router, middleware included, without CORS.
pub fn create_test_server(state: AppState) -> TestServer {
    let app = app_router(state, None);
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

/// Same as [`create_test_server`] with CORS enabled for `origins`.
pub fn create_cors_test_server(state: AppState, origins: &[&str]) -> TestServer {
    let origins: Vec<String> = origins.iter().map(|o| o.to_string()).collect();
    let app = app_router(state, cors::layer(&origins));
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub async fn create_test_short_url(state: &AppState, url: &str) -> ShortUrl {
    state.shortener.shorten(url).await.unwrap()
}
