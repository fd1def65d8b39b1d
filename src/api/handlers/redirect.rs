//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoints
///
/// - `GET /{code}`
/// - `GET /api/urls/{code}`
///
/// # Request Flow
///
/// 1. Resolve the code
/// 2. Count the click atomically in the store
/// 3. Return 302 Found with `Location` set to the original URL
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
/// Returns 500 if the click could not be recorded.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.shortener.follow(&code).await?;

    debug!(code = %record.short_code, clicks = record.clicks, "Redirecting");

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, record.original_url)],
    ))
}
