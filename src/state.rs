//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ShortenerService, UrlValidator};
use crate::domain::probe::ReachabilityProbe;
use crate::domain::repositories::ShortUrlRepository;
use crate::utils::url_validator::HostPolicy;

/// Shortener service over type-erased store and probe.
pub type DynShortenerService = ShortenerService<dyn ShortUrlRepository, dyn ReachabilityProbe>;

/// Application state cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<DynShortenerService>,
}

impl AppState {
    /// Wires the shortener service from its adapters.
    pub fn new(
        repository: Arc<dyn ShortUrlRepository>,
        probe: Arc<dyn ReachabilityProbe>,
        host_policy: HostPolicy,
        base_url: impl Into<String>,
    ) -> Self {
        let validator = UrlValidator::new(host_policy, probe);
        let shortener = ShortenerService::new(repository, validator, base_url);

        Self {
            shortener: Arc::new(shortener),
        }
    }
}
