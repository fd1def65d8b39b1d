//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the short URL store.
///
/// Implementations must enforce uniqueness of both `original_url` and
/// `short_code` themselves; the service relies on that to resolve races
/// between concurrent inserts of the same URL.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryShortUrlRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Finds a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on store errors.
    async fn find_by_short_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Finds a record by its normalized original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on store errors.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<ShortUrl>, AppError>;

    /// Inserts a new record with `clicks = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if either the URL or the code already exists.
    /// Returns [`AppError::Persistence`] on other store errors.
    async fn insert(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Atomically adds one to the click counter of `code`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(clicks))` with the counter value after the increment
    /// - `Ok(None)` if no record has this code
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on store errors.
    async fn increment_clicks(&self, code: &str) -> Result<Option<i64>, AppError>;

    /// Returns one page of records ordered newest first, plus the total count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on store errors.
    async fn list_page(&self, offset: i64, limit: i64) -> Result<(Vec<ShortUrl>, i64), AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] when the store cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
