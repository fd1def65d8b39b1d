//! Pagination query parameters and response metadata.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, DisplayFromStr, serde_as};

use super::short_url::ShortUrlResponse;
use crate::application::services::{DEFAULT_PAGE_LIMIT, UrlPage};

/// Pagination query parameters.
///
/// Uses `serde_with` to parse numbers from query strings. A value that is not
/// a number falls back to the default, and out-of-range values are clamped by
/// the service. Neither is rejected.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub page: Option<i64>,

    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

impl PaginationParams {
    /// Returns `(page, limit)` with defaults applied.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `limit`: 10
    pub fn page_and_limit(&self) -> (i64, i64) {
        (
            self.page.unwrap_or(1),
            self.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
        )
    }
}

/// Pagination metadata included in list responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

/// Response for `GET /api/urls`.
#[derive(Debug, Serialize)]
pub struct UrlListResponse {
    pub data: Vec<ShortUrlResponse>,
    pub pagination: PaginationMeta,
}

impl UrlListResponse {
    /// Builds the response, rendering each record with `short_url_for`.
    pub fn from_page(page: UrlPage, short_url_for: impl Fn(&str) -> String) -> Self {
        let pagination = PaginationMeta {
            total: page.total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages,
        };

        let data = page
            .records
            .into_iter()
            .map(|record| {
                let short_url = short_url_for(&record.short_code);
                ShortUrlResponse::new(record, short_url)
            })
            .collect();

        Self { data, pagination }
    }
}
