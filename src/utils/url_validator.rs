//! Structural URL validation.
//!
//! These checks are pure and cheap, and run before any network call so that
//! obviously bad input never costs a reachability probe.

use crate::error::AppError;
use serde_json::json;
use url::{Host, Url};

/// Longest URL accepted, matching the width of the `original_url` column.
pub const MAX_URL_LENGTH: usize = 2048;

/// Hosts rejected unless the deployment overrides the list.
pub const DEFAULT_BLOCKED_HOSTS: &[&str] = &["localhost", ".localhost", ".local", ".internal"];

/// Rules deciding which hosts may be shortened.
///
/// Entries in `blocked_hosts` that start with `.` match as suffixes
/// (`.local` blocks `printer.local`), other entries match the whole host.
/// Matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPolicy {
    allow_ip_literals: bool,
    blocked_hosts: Vec<String>,
}

impl HostPolicy {
    pub fn new<I, S>(allow_ip_literals: bool, blocked_hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let blocked_hosts = blocked_hosts
            .into_iter()
            .map(|h| h.as_ref().trim().to_ascii_lowercase())
            .filter(|h| !h.is_empty())
            .collect();

        Self {
            allow_ip_literals,
            blocked_hosts,
        }
    }

    pub fn allows_ip_literals(&self) -> bool {
        self.allow_ip_literals
    }

    pub fn blocked_hosts(&self) -> &[String] {
        &self.blocked_hosts
    }

    /// Returns true if `host` matches an entry of the deny list.
    pub fn is_blocked(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.').to_ascii_lowercase();

        self.blocked_hosts.iter().any(|entry| {
            if entry.starts_with('.') {
                host.ends_with(entry.as_str()) || host == entry[1..]
            } else {
                host == *entry
            }
        })
    }
}

impl Default for HostPolicy {
    fn default() -> Self {
        Self::new(false, DEFAULT_BLOCKED_HOSTS.iter().copied())
    }
}

/// Checks that `url` is a non-empty absolute HTTP(S) URL with an acceptable host.
///
/// # Rules
///
/// 1. Not empty after trimming
/// 2. At most [`MAX_URL_LENGTH`] characters
/// 3. Parses as an absolute URL with scheme `http` or `https`
/// 4. Has a host that is not on the policy's deny list
/// 5. IP literal hosts only when the policy allows them
/// 6. Domain hosts contain at least one `.` (no bare hostnames)
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] naming the first rule that failed.
pub fn validate_structure(url: &str, policy: &HostPolicy) -> Result<(), AppError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(AppError::invalid_url(
            "Please provide a URL to shorten",
            json!({ "reason": "URL is required" }),
        ));
    }

    if url.len() > MAX_URL_LENGTH {
        return Err(AppError::invalid_url_for(
            url,
            format!("URL exceeds maximum length of {} characters", MAX_URL_LENGTH),
        ));
    }

    let parsed = Url::parse(url).map_err(|e| AppError::invalid_url_for(url, e.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::invalid_url_for(
            url,
            "Only HTTP and HTTPS protocols are allowed",
        ));
    }

    match parsed.host() {
        None => Err(AppError::invalid_url_for(url, "URL has no host")),
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {
            if policy.allows_ip_literals() {
                Ok(())
            } else {
                Err(AppError::invalid_url_for(
                    url,
                    "IP address hosts are not allowed",
                ))
            }
        }
        Some(Host::Domain(domain)) => {
            if policy.is_blocked(domain) {
                return Err(AppError::invalid_url_for(url, "Host is not allowed"));
            }

            if !domain.trim_end_matches('.').contains('.') {
                return Err(AppError::invalid_url_for(
                    url,
                    "Host must be a domain name containing at least one dot",
                ));
            }

            Ok(())
        }
    }
}
