//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`ShortUrl`] - A stored short code → original URL mapping with its click counter
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewShortUrl`] carries only the fields the caller decides.

pub mod short_url;

pub use short_url::{NewShortUrl, ShortUrl};
