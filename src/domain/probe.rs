//! Reachability probe port.
//!
//! A probe answers one question: does the target URL currently respond with a
//! non-error status? The HTTP implementation lives in
//! [`crate::infrastructure::http`].

use async_trait::async_trait;

/// Result of probing a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The target answered with a status below 400.
    Reachable { status: u16 },
    /// Error status, timeout, connection failure or any transport error.
    Unreachable { reason: String },
}

impl ProbeOutcome {
    pub fn is_reachable(&self) -> bool {
        matches!(self, ProbeOutcome::Reachable { .. })
    }
}

/// Checks whether a URL is live before it is accepted for shortening.
///
/// Implementations bound their own duration; callers never add retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeOutcome;
}
