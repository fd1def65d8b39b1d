//! URL normalization.
//!
//! Maps semantically equivalent spellings of a URL onto one canonical string
//! so that they share a stored record and a short code.

use std::fmt::Write as _;
use url::Url;

/// Normalizes a URL to a canonical form.
///
/// # Normalization Rules
///
/// 1. **Whitespace**: Leading and trailing whitespace is trimmed
/// 2. **Scheme and host**: Converted to lowercase
/// 3. **Default ports**: Removed (80 for HTTP, 443 for HTTPS), other ports kept
/// 4. **Path**: An empty or root path (`/`) becomes empty; any other path is
///    preserved with case sensitivity, including a trailing slash
/// 5. **Query and fragment**: Preserved, each reattached with its separator
///    only when non-empty
/// 6. **Credentials**: `user:pass@` is not carried over
///
/// Input that does not parse as an absolute URL with a host is returned
/// trimmed but otherwise unchanged; rejecting it is left to validation.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("HTTPS://EXAMPLE.COM/Path/"), "https://example.com/Path/");
/// assert_eq!(normalize_url("http://example.com:80/"), "http://example.com");
/// assert_eq!(normalize_url(" not-a-url "), "not-a-url");
/// ```
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();

    let Ok(url) = Url::parse(trimmed) else {
        return trimmed.to_string();
    };

    let Some(host) = url.host_str() else {
        return trimmed.to_string();
    };

    let mut normalized = format!(
        "{}://{}",
        url.scheme().to_ascii_lowercase(),
        host.to_ascii_lowercase()
    );

    let is_default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if let Some(port) = url.port()
        && !is_default_port
    {
        let _ = write!(normalized, ":{}", port);
    }

    let path = url.path();
    if !path.is_empty() && path != "/" {
        normalized.push_str(path);
    }

    if let Some(query) = url.query().filter(|q| !q.is_empty()) {
        normalized.push('?');
        normalized.push_str(query);
    }

    if let Some(fragment) = url.fragment().filter(|f| !f.is_empty()) {
        normalized.push('#');
        normalized.push_str(fragment);
    }

    normalized
}
