//! CORS for the separately hosted front end.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Builds the CORS layer for the configured origins.
///
/// Returns `None` when no origins are configured, leaving CORS off. A single
/// `*` entry allows any origin. Entries that are not valid header values are
/// skipped with a warning.
pub fn layer(allowed_origins: &[String]) -> Option<CorsLayer> {
    if allowed_origins.is_empty() {
        return None;
    }

    if allowed_origins.iter().any(|o| o == "*") {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_origins_disables_cors() {
        assert!(layer(&[]).is_none());
    }

    #[test]
    fn test_wildcard_and_list_enable_cors() {
        assert!(layer(&["*".to_string()]).is_some());
        assert!(layer(&["https://app.example.com".to_string()]).is_some());
    }

    #[test]
    fn test_only_invalid_origins_disables_cors() {
        assert!(layer(&["bad\norigin".to_string()]).is_none());
    }
}
