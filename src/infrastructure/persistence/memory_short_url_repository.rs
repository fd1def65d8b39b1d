//! Process-local short URL store.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    next_id: i64,
    by_code: HashMap<String, ShortUrl>,
    code_by_url: HashMap<String, String>,
}

/// In-memory repository for development and tests.
///
/// Both uniqueness rules are checked and applied under a single lock, so it
/// gives the same conflict semantics as the PostgreSQL store. Data is lost on
/// restart.
pub struct InMemoryShortUrlRepository {
    inner: Mutex<Inner>,
}

impl InMemoryShortUrlRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::persistence(json!({ "reason": "mutex poisoned" })))
    }
}

impl Default for InMemoryShortUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShortUrlRepository for InMemoryShortUrlRepository {
    async fn find_by_short_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        let inner = self.lock()?;
        Ok(inner.by_code.get(code).cloned())
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, AppError> {
        let inner = self.lock()?;
        Ok(inner
            .code_by_url
            .get(original_url)
            .and_then(|code| inner.by_code.get(code))
            .cloned())
    }

    async fn insert(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let mut inner = self.lock()?;

        if inner.code_by_url.contains_key(&new_short_url.original_url) {
            return Err(AppError::conflict(
                "Short URL already exists",
                json!({ "constraint": "short_urls_original_url_key" }),
            ));
        }
        if inner.by_code.contains_key(&new_short_url.short_code) {
            return Err(AppError::conflict(
                "Short URL already exists",
                json!({ "constraint": "short_urls_short_code_key" }),
            ));
        }

        inner.next_id += 1;
        let short_url = ShortUrl::new(
            inner.next_id,
            new_short_url.original_url,
            new_short_url.short_code,
            0,
            Utc::now(),
        );

        inner
            .code_by_url
            .insert(short_url.original_url.clone(), short_url.short_code.clone());
        inner
            .by_code
            .insert(short_url.short_code.clone(), short_url.clone());

        Ok(short_url)
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<i64>, AppError> {
        let mut inner = self.lock()?;
        Ok(inner.by_code.get_mut(code).map(|short_url| {
            short_url.clicks += 1;
            short_url.clicks
        }))
    }

    async fn list_page(&self, offset: i64, limit: i64) -> Result<(Vec<ShortUrl>, i64), AppError> {
        let inner = self.lock()?;

        let mut all: Vec<&ShortUrl> = inner.by_code.values().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = all.len() as i64;
        let page = all
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect();

        Ok((page, total))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.lock().map(|_| ())
    }
}
