//! Two-phase URL admission check: structure first, then reachability.

use std::sync::Arc;

use crate::domain::probe::{ProbeOutcome, ReachabilityProbe};
use crate::error::AppError;
use crate::utils::url_validator::{HostPolicy, validate_structure};
use tracing::{debug, warn};

/// Validates URLs before they are accepted for shortening.
///
/// Structural rules come from [`HostPolicy`]; liveness is delegated to a
/// [`ReachabilityProbe`]. The probe is only consulted for URLs that pass the
/// structural rules.
pub struct UrlValidator<P: ReachabilityProbe + ?Sized> {
    policy: HostPolicy,
    probe: Arc<P>,
}

impl<P: ReachabilityProbe + ?Sized> UrlValidator<P> {
    pub fn new(policy: HostPolicy, probe: Arc<P>) -> Self {
        Self { policy, probe }
    }

    /// Runs the structural checks only. No I/O.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] on the first failed rule.
    pub fn check_structure(&self, url: &str) -> Result<(), AppError> {
        validate_structure(url, &self.policy)
    }

    /// Probes the URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnreachableUrl`] for every non-success outcome.
    pub async fn check_reachable(&self, url: &str) -> Result<(), AppError> {
        match self.probe.probe(url).await {
            ProbeOutcome::Reachable { status } => {
                debug!(url, status, "URL is reachable");
                Ok(())
            }
            ProbeOutcome::Unreachable { reason } => {
                warn!(url, %reason, "URL is unreachable");
                Err(AppError::unreachable_url(url, reason))
            }
        }
    }

    /// Runs both phases in order.
    ///
    /// # Errors
    ///
    /// See [`Self::check_structure`] and [`Self::check_reachable`].
    pub async fn validate(&self, url: &str) -> Result<(), AppError> {
        self.check_structure(url)?;
        self.check_reachable(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::probe::MockReachabilityProbe;

    #[tokio::test]
    async fn test_structural_failure_skips_probe() {
        let mut probe = MockReachabilityProbe::new();
        probe.expect_probe().times(0);

        let validator = UrlValidator::new(HostPolicy::default(), Arc::new(probe));
        let result = validator.validate("ftp://x.com").await;

        assert!(matches!(result, Err(AppError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_reachable_url_passes() {
        let mut probe = MockReachabilityProbe::new();
        probe
            .expect_probe()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(|_| ProbeOutcome::Reachable { status: 200 });

        let validator = UrlValidator::new(HostPolicy::default(), Arc::new(probe));

        assert!(validator.validate("https://example.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_redirect_status_counts_as_reachable() {
        let mut probe = MockReachabilityProbe::new();
        probe
            .expect_probe()
            .returning(|_| ProbeOutcome::Reachable { status: 301 });

        let validator = UrlValidator::new(HostPolicy::default(), Arc::new(probe));

        assert!(validator.check_reachable("https://example.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_url_carries_url() {
        let mut probe = MockReachabilityProbe::new();
        probe.expect_probe().returning(|_| ProbeOutcome::Unreachable {
            reason: "status 404".to_string(),
        });

        let validator = UrlValidator::new(HostPolicy::default(), Arc::new(probe));
        let err = validator
            .validate("https://example.com/missing")
            .await
            .unwrap_err();

        match err {
            AppError::UnreachableUrl { details, .. } => {
                assert_eq!(details["url"], "https://example.com/missing");
                assert_eq!(details["reason"], "status 404");
            }
            other => panic!("expected UnreachableUrl, got {other:?}"),
        }
    }
}
