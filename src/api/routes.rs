//! API route configuration.

use crate::api::handlers::{list_urls_handler, redirect_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /urls/shorten`       - Shorten a URL (idempotent per normalized URL)
/// - `GET  /urls`               - List short URLs (paginated)
/// - `GET  /urls/{code}/stats`  - Record with click count, no click counted
/// - `GET  /urls/{code}`        - Redirect to the original URL, click counted
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/urls/shorten", post(shorten_handler))
        .route("/urls", get(list_urls_handler))
        .route("/urls/{code}/stats", get(stats_handler))
        .route("/urls/{code}", get(redirect_handler))
}
