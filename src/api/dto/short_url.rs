//! DTO for a single short URL record.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortUrl;

/// Public representation of a short URL.
///
/// Shared by the shorten, stats and list endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlResponse {
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortUrlResponse {
    /// Builds the response from a record and its public short URL.
    pub fn new(record: ShortUrl, short_url: String) -> Self {
        Self {
            original_url: record.original_url,
            short_code: record.short_code,
            short_url,
            clicks: record.clicks,
            created_at: record.created_at,
        }
    }
}
