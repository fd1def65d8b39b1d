//! Business logic services for the application layer.

pub mod shortener_service;
pub mod url_validator;

pub use shortener_service::{
    DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, ShortenerService, UrlPage, page_window,
};
pub use url_validator::UrlValidator;
