//! Short URL creation, resolution, click counting and listing.

use std::sync::Arc;

use crate::application::services::url_validator::UrlValidator;
use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::probe::ReachabilityProbe;
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;
use tracing::{debug, error, info, instrument};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Largest page size a caller can request.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// One page of short URLs with pagination metadata.
#[derive(Debug, Clone)]
pub struct UrlPage {
    pub records: Vec<ShortUrl>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl UrlPage {
    /// Wraps one page of records, deriving `total_pages` from `total`.
    pub fn new(records: Vec<ShortUrl>, total: i64, page: i64, limit: i64) -> Self {
        Self {
            records,
            total,
            page,
            limit,
            total_pages: (total + limit - 1) / limit,
        }
    }
}

/// Clamps the requested page and limit, returning `(page, limit, offset)`.
///
/// `page` is at least 1 and `limit` within `1..=MAX_PAGE_LIMIT`. The offset
/// saturates instead of overflowing for absurd page numbers.
pub fn page_window(page: i64, limit: i64) -> (i64, i64, i64) {
    let page = page.max(1);
    let limit = limit.clamp(1, MAX_PAGE_LIMIT);
    let offset = (page - 1).saturating_mul(limit);

    (page, limit, offset)
}

/// Orchestrates normalize → validate → generate → insert-or-fetch.
///
/// The service keeps no mutable state of its own. Uniqueness and click
/// counters are owned by the store; concurrent shortens of the same URL are
/// reconciled after the store rejects the losing insert.
pub struct ShortenerService<R: ShortUrlRepository + ?Sized, P: ReachabilityProbe + ?Sized> {
    repository: Arc<R>,
    validator: UrlValidator<P>,
    base_url: String,
}

impl<R, P> ShortenerService<R, P>
where
    R: ShortUrlRepository + ?Sized,
    P: ReachabilityProbe + ?Sized,
{
    /// Creates a new shortener service.
    ///
    /// `base_url` prefixes every public short URL; a trailing `/` is ignored.
    pub fn new(repository: Arc<R>, validator: UrlValidator<P>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            repository,
            validator,
            base_url,
        }
    }

    /// Shortens a URL, returning the existing record if it was shortened before.
    ///
    /// # Flow
    ///
    /// 1. Reject empty input
    /// 2. Normalize
    /// 3. Structural validation
    /// 4. Reachability probe
    /// 5. Derive the code from the normalized URL
    /// 6. Insert; on a unique violation, return the record that won
    ///
    /// Nothing is written before step 6, so abandoning the call earlier leaves
    /// the store untouched.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] for empty, malformed or disallowed URLs
    /// - [`AppError::UnreachableUrl`] when the probe fails
    /// - [`AppError::Persistence`] on store failure, or when the conflicting
    ///   record cannot be found (a code collision between different URLs)
    #[instrument(skip(self))]
    pub async fn shorten(&self, raw_url: &str) -> Result<ShortUrl, AppError> {
        if raw_url.trim().is_empty() {
            return Err(AppError::invalid_url(
                "Please provide a URL to shorten",
                json!({ "reason": "URL is required" }),
            ));
        }

        let normalized = normalize_url(raw_url);

        self.validator.validate(&normalized).await?;

        let short_code = generate_code(&normalized);

        let new_short_url = NewShortUrl {
            original_url: normalized.clone(),
            short_code,
        };

        match self.repository.insert(new_short_url).await {
            Ok(created) => {
                info!(code = %created.short_code, url = %created.original_url, "Short URL created");
                Ok(created)
            }
            Err(AppError::Conflict { details, .. }) => {
                debug!(url = %normalized, "Insert conflicted, fetching existing record");
                self.reconcile(&normalized, details).await
            }
            Err(e) => Err(into_persistence(e)),
        }
    }

    /// Returns the record that caused an insert conflict.
    async fn reconcile(
        &self,
        normalized: &str,
        conflict: serde_json::Value,
    ) -> Result<ShortUrl, AppError> {
        match self.repository.find_by_original_url(normalized).await {
            Ok(Some(existing)) => Ok(existing),
            Ok(None) => {
                error!(
                    url = normalized,
                    conflict = %conflict,
                    "Unique violation without a matching URL; short code collision"
                );
                Err(AppError::persistence(json!({
                    "reason": "Conflicting record not found",
                    "conflict": conflict,
                })))
            }
            Err(e) => Err(into_persistence(e)),
        }
    }

    /// Looks up a record by its short code without touching its counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] carrying the code if no record matches.
    /// Returns [`AppError::Persistence`] on store errors.
    #[instrument(skip(self))]
    pub async fn resolve(&self, code: &str) -> Result<ShortUrl, AppError> {
        self.repository
            .find_by_short_code(code)
            .await?
            .ok_or_else(|| AppError::short_code_not_found(code))
    }

    /// Counts one click on `short_url` and updates its in-memory counter.
    ///
    /// The increment itself is atomic in the store, so concurrent redirects
    /// for the same code never lose updates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the store fails or the record is gone.
    #[instrument(skip(self, short_url), fields(code = %short_url.short_code))]
    pub async fn increment_clicks(&self, short_url: &mut ShortUrl) -> Result<(), AppError> {
        match self.repository.increment_clicks(&short_url.short_code).await {
            Ok(Some(clicks)) => {
                short_url.clicks = clicks;
                Ok(())
            }
            Ok(None) => Err(AppError::persistence(json!({
                "reason": "Record disappeared before its click was counted",
                "code": short_url.short_code,
            }))),
            Err(e) => Err(into_persistence(e)),
        }
    }

    /// Resolves a code and counts the click, as done for every redirect.
    ///
    /// # Errors
    ///
    /// See [`Self::resolve`] and [`Self::increment_clicks`].
    pub async fn follow(&self, code: &str) -> Result<ShortUrl, AppError> {
        let mut short_url = self.resolve(code).await?;
        self.increment_clicks(&mut short_url).await?;
        Ok(short_url)
    }

    /// Lists records newest first.
    ///
    /// `page` is clamped to at least 1 and `limit` to `1..=MAX_PAGE_LIMIT`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on store errors.
    #[instrument(skip(self))]
    pub async fn list_paginated(&self, page: i64, limit: i64) -> Result<UrlPage, AppError> {
        let (page, limit, offset) = page_window(page, limit);
        let (records, total) = self.repository.list_page(offset, limit).await?;

        Ok(UrlPage::new(records, total, page, limit))
    }

    /// Builds the public short URL for a code.
    pub fn short_url_for(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Checks that the store answers.
    ///
    /// # Errors
    ///
    /// Returns the store's error when it cannot be reached.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

/// Collapses any store-side error into a persistence error.
fn into_persistence(e: AppError) -> AppError {
    match e {
        AppError::Persistence { .. } => e,
        other => {
            error!(error = %other, "Unexpected store error");
            AppError::persistence(json!({ "reason": other.to_string() }))
        }
    }
}
