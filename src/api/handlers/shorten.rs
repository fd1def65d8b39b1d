//! Handler for the shorten endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::Value;
use tracing::debug;
use validator::Validate;

use crate::api::dto::short_url::ShortUrlResponse;
use crate::api::dto::shorten::ShortenRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL, or returns the existing short URL for it.
///
/// # Endpoint
///
/// `POST /api/urls/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://Example.com/Path/" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "originalUrl": "https://example.com/Path/",
///   "shortCode": "6a7531d6",
///   "shortUrl": "http://localhost:3000/6a7531d6",
///   "clicks": 0,
///   "createdAt": "2026-01-01T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing, malformed, disallowed or
/// unreachable. A body that is not JSON, or whose `url` is not a string,
/// counts as a missing URL. Returns 500 if the record could not be saved.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    let body = match body {
        Ok(Json(body)) => Some(body),
        Err(rejection) => {
            debug!(%rejection, "Shorten request body is not JSON");
            None
        }
    };

    let payload = ShortenRequest::from_body(body.as_ref());
    payload.validate()?;

    let raw_url = payload.url.unwrap_or_default();
    let record = state.shortener.shorten(&raw_url).await?;
    let short_url = state.shortener.short_url_for(&record.short_code);

    Ok(Json(ShortUrlResponse::new(record, short_url)))
}
