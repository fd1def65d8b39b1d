//! DTOs for the shorten endpoint.

use serde_json::Value;
use validator::Validate;

/// Request to shorten a single URL.
///
/// Built from whatever JSON the client sent. A missing body, a missing
/// `url` field or a `url` that is not a string all become `None`, which the
/// service answers with "Please provide a URL".
#[derive(Debug, Default, Validate)]
pub struct ShortenRequest {
    #[validate(length(max = 2048, message = "URL exceeds maximum length"))]
    pub url: Option<String>,
}

impl ShortenRequest {
    pub fn from_body(body: Option<&Value>) -> Self {
        let url = body
            .and_then(|body| body.get("url"))
            .and_then(Value::as_str)
            .map(str::to_owned);

        Self { url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_url_is_kept() {
        let body = json!({ "url": "https://example.com" });
        let request = ShortenRequest::from_body(Some(&body));
        assert_eq!(request.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_non_string_url_is_dropped() {
        for body in [json!({ "url": 123 }), json!({ "url": null }), json!(["x"]), json!("x")] {
            assert!(ShortenRequest::from_body(Some(&body)).url.is_none(), "{body}");
        }
        assert!(ShortenRequest::from_body(None).url.is_none());
    }

    #[test]
    fn test_overlong_url_fails_validation() {
        let request = ShortenRequest {
            url: Some(format!("https://example.com/{}", "a".repeat(2048))),
        };
        assert!(request.validate().is_err());
    }
}
