//! Deterministic short code generation.
//!
//! The code is a truncated SHA-256 digest of the normalized URL, so the same
//! URL always maps to the same code and duplicate submissions collapse onto one
//! record without a lookup.
//!
//! # Collision space
//!
//! [`CODE_LENGTH`] hex characters give 32 bits. By the birthday bound there is
//! roughly a 50 % chance of at least one collision once the store holds about
//! 77 000 distinct URLs. A colliding insert is rejected by the store's unique
//! constraint on `short_code` and surfaces as a persistence error; widening
//! the prefix changes every code, so it is a migration, not a setting.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest.
pub const CODE_LENGTH: usize = 8;

/// Derives the short code for an already normalized URL.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code("https://example.com");
/// assert_eq!(code.len(), 8);
/// assert_eq!(code, generate_code("https://example.com"));
/// ```
pub fn generate_code(normalized_url: &str) -> String {
    let digest = Sha256::digest(normalized_url.as_bytes());
    let mut code = hex::encode(digest);
    code.truncate(CODE_LENGTH);
    code
}

/// Returns true if `code` has the shape of a generated code.
pub fn is_well_formed_code(code: &str) -> bool {
    code.len() == CODE_LENGTH
        && code
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}
