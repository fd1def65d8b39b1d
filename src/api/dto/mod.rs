//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Public field names are camelCase.

pub mod health;
pub mod pagination;
pub mod short_url;
pub mod shorten;
