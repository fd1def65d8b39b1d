//! Short URL entity representing a stored code → URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its click counter.
///
/// `original_url` is always stored in normalized form and `short_code` is
/// derived from it, so both are unique across the store. Only `clicks`
/// changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            clicks,
            created_at,
        }
    }
}

/// Input data for inserting a new short URL.
///
/// `id`, `clicks` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub original_url: String,
    pub short_code: String,
}
