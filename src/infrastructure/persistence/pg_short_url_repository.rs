//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ShortUrlRow {
    id: i64,
    original_url: String,
    short_code: String,
    clicks: i64,
    created_at: DateTime<Utc>,
}

impl From<ShortUrlRow> for ShortUrl {
    fn from(r: ShortUrlRow) -> Self {
        ShortUrl::new(r.id, r.original_url, r.short_code, r.clicks, r.created_at)
    }
}

/// PostgreSQL repository for short URLs.
///
/// Uniqueness of `original_url` and `short_code` is enforced by table
/// constraints; violations come back as [`AppError::Conflict`] through the
/// `From<sqlx::Error>` conversion. Click increments are a single `UPDATE`,
/// so concurrent redirects never lose counts.
pub struct PgShortUrlRepository {
    pool: Arc<PgPool>,
}

impl PgShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortUrlRepository for PgShortUrlRepository {
    async fn find_by_short_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, original_url, short_code, clicks, created_at
            FROM short_urls
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortUrl::from))
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, original_url, short_code, clicks, created_at
            FROM short_urls
            WHERE original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortUrl::from))
    }

    async fn insert(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            INSERT INTO short_urls (original_url, short_code)
            VALUES ($1, $2)
            RETURNING id, original_url, short_code, clicks, created_at
            "#,
        )
        .bind(&new_short_url.original_url)
        .bind(&new_short_url.short_code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<i64>, AppError> {
        let clicks = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE short_urls
            SET clicks = clicks + 1
            WHERE short_code = $1
            RETURNING clicks
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(clicks)
    }

    async fn list_page(&self, offset: i64, limit: i64) -> Result<(Vec<ShortUrl>, i64), AppError> {
        let rows = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, original_url, short_code, clicks, created_at
            FROM short_urls
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM short_urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok((rows.into_iter().map(ShortUrl::from).collect(), total))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
