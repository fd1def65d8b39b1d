//! HTTP `HEAD` reachability probe.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, redirect};
use tracing::debug;

use crate::domain::probe::{ProbeOutcome, ReachabilityProbe};

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_MAX_REDIRECTS: usize = 3;
pub const DEFAULT_USER_AGENT: &str = "URL-Shortener-Bot/1.0";

/// Settings for [`HttpProbe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Upper bound for the whole exchange, redirects included.
    pub timeout: Duration,
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_PROBE_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Probes URLs with a single `HEAD` request.
///
/// Redirects are followed up to the configured limit. A final status below
/// 400 counts as reachable; everything else, including transport errors and
/// an exhausted redirect budget, is unreachable. The probe never retries.
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// Builds the probe and its HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &ProbeConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to build HTTP probe client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ReachabilityProbe for HttpProbe {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        match self.client.head(url).send().await {
            Ok(response) => {
                let status = response.status();
                debug!(url, status = status.as_u16(), final_url = %response.url(), "Probe answered");

                if status.as_u16() < 400 {
                    ProbeOutcome::Reachable {
                        status: status.as_u16(),
                    }
                } else {
                    ProbeOutcome::Unreachable {
                        reason: format!("Target responded with status {}", status.as_u16()),
                    }
                }
            }
            Err(e) => {
                debug!(url, error = %e, "Probe failed");
                ProbeOutcome::Unreachable {
                    reason: describe_error(&e),
                }
            }
        }
    }
}

fn describe_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timed out".to_string()
    } else if e.is_redirect() {
        "Too many redirects".to_string()
    } else if e.is_connect() {
        "Connection failed".to_string()
    } else {
        e.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        http::{StatusCode, header},
        routing::get,
    };
    use tokio::net::TcpListener;

    async fn spawn_target() -> String {
        let app = Router::new()
            .route("/ok", get(|| async { "ok" }))
            .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
            .route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(3)).await;
                    "late"
                }),
            )
            .route(
                "/hop",
                get(|| async { (StatusCode::FOUND, [(header::LOCATION, "/ok")]) }),
            )
            .route(
                "/loop",
                get(|| async { (StatusCode::FOUND, [(header::LOCATION, "/loop")]) }),
            );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}")
    }

    fn probe_with_timeout(timeout: Duration) -> HttpProbe {
        HttpProbe::new(&ProbeConfig {
            timeout,
            ..ProbeConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_success_is_reachable() {
        let base = spawn_target().await;
        let outcome = HttpProbe::new(&ProbeConfig::default())
            .unwrap()
            .probe(&format!("{base}/ok"))
            .await;

        assert_eq!(outcome, ProbeOutcome::Reachable { status: 200 });
    }

    #[tokio::test]
    async fn test_client_and_server_errors_are_unreachable() {
        let base = spawn_target().await;
        let probe = HttpProbe::new(&ProbeConfig::default()).unwrap();

        assert!(!probe.probe(&format!("{base}/missing")).await.is_reachable());
        assert!(!probe.probe(&format!("{base}/broken")).await.is_reachable());
    }

    #[tokio::test]
    async fn test_redirect_within_limit_is_followed() {
        let base = spawn_target().await;
        let outcome = HttpProbe::new(&ProbeConfig::default())
            .unwrap()
            .probe(&format!("{base}/hop"))
            .await;

        assert_eq!(outcome, ProbeOutcome::Reachable { status: 200 });
    }

    #[tokio::test]
    async fn test_redirect_loop_is_unreachable() {
        let base = spawn_target().await;
        let outcome = HttpProbe::new(&ProbeConfig::default())
            .unwrap()
            .probe(&format!("{base}/loop"))
            .await;

        assert!(!outcome.is_reachable());
    }

    #[tokio::test]
    async fn test_timeout_is_unreachable() {
        let base = spawn_target().await;
        let outcome = probe_with_timeout(Duration::from_millis(200))
            .probe(&format!("{base}/slow"))
            .await;

        assert_eq!(
            outcome,
            ProbeOutcome::Unreachable {
                reason: "Request timed out".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let outcome = probe_with_timeout(Duration::from_secs(2))
            .probe(&format!("http://{addr}/"))
            .await;

        assert!(!outcome.is_reachable());
    }
}
