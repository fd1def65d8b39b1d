//! Pure helpers for URL processing and short code derivation.
//!
//! - [`url_normalizer`] - URL canonicalization
//! - [`url_validator`] - Structural URL checks and the host policy
//! - [`code_generator`] - Deterministic short code generation

pub mod code_generator;
pub mod url_normalizer;
pub mod url_validator;
