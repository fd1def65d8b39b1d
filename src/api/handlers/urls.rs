//! Handler for listing short URLs.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::pagination::{PaginationParams, UrlListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists short URLs, newest first.
///
/// # Endpoint
///
/// `GET /api/urls?page=1&limit=10`
///
/// # Query Parameters
///
/// - `page` - page number, clamped to at least 1 (default: 1)
/// - `limit` - page size, clamped to 1..=100 (default: 10)
///
/// # Response
///
/// ```json
/// {
///   "data": [ { "originalUrl": "...", "shortCode": "...", ... } ],
///   "pagination": { "total": 23, "page": 3, "limit": 10, "totalPages": 3 }
/// }
/// ```
pub async fn list_urls_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<UrlListResponse>, AppError> {
    let (page, limit) = params.page_and_limit();

    let page = state.shortener.list_paginated(page, limit).await?;

    Ok(Json(UrlListResponse::from_page(page, |code| {
        state.shortener.short_url_for(code)
    })))
}
