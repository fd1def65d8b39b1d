//! Handler for short URL statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::short_url::ShortUrlResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a short URL record with its click count.
///
/// # Endpoint
///
/// `GET /api/urls/{code}/stats`
///
/// Reading stats never counts as a click.
///
/// # Errors
///
/// Returns 404 Not Found if the code does not exist.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    let record = state.shortener.resolve(&code).await?;
    let short_url = state.shortener.short_url_for(&record.short_code);

    Ok(Json(ShortUrlResponse::new(record, short_url)))
}
