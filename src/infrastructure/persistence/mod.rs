//! Short URL store implementations.
//!
//! # Repositories
//!
//! - [`PgShortUrlRepository`] - PostgreSQL store, the production backend
//! - [`InMemoryShortUrlRepository`] - process-local store for development and tests

pub mod memory_short_url_repository;
pub mod pg_short_url_repository;

pub use memory_short_url_repository::InMemoryShortUrlRepository;
pub use pg_short_url_repository::PgShortUrlRepository;
