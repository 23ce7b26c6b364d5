//! Pooled HTTP client that fetches one response body per URL

use crate::error::{Result, ScanError};
use crate::models::ScanConfig;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::redirect::Policy;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client wrapper holding one connection pool per redirect policy
///
/// Certificate and hostname checks are disabled: the scanner targets
/// arbitrary third-party hosts and reachability matters more than trust.
/// Both inner clients negotiate HTTP/1.1 or HTTP/2 via ALPN and keep idle
/// connections around so repeated fetches reuse sockets.
#[derive(Clone)]
pub struct HttpClient {
    direct: Client,
    following: Client,
}

impl HttpClient {
    /// Creates a new HttpClient from scan configuration
    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        Ok(Self {
            direct: build_client(config, Policy::none())?,
            following: build_client(config, Policy::limited(config.max_redirects))?,
        })
    }

    /// Sends a GET for `url` and returns the fully buffered body as text.
    ///
    /// With `follow_redirects` off, a 3xx response is returned as-is and its
    /// own body is what comes back. Bodies that are not valid in their
    /// declared charset are decoded lossily. Every failure, from DNS to a
    /// truncated body, surfaces as [`ScanError::Fetch`]. Nothing is retried.
    pub async fn fetch(&self, url: &str, follow_redirects: bool) -> Result<String> {
        let client = if follow_redirects {
            &self.following
        } else {
            &self.direct
        };

        let response = client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("*/*"))
            .send()
            .await
            .map_err(|e| fetch_error(url, e))?;

        debug!("Response: {} for {}", response.status(), response.url());

        // The response is consumed here, which hands the connection back to
        // the pool whether or not the read succeeds.
        response.text().await.map_err(|e| fetch_error(url, e))
    }
}

fn build_client(config: &ScanConfig, redirect: Policy) -> Result<Client> {
    Client::builder()
        .user_agent(&config.user_agent)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.timeout_secs))
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .pool_idle_timeout(Duration::from_secs(config.pool_idle_timeout_secs))
        .redirect(redirect)
        .danger_accept_invalid_certs(true)
        .danger_accept_invalid_hostnames(true)
        .build()
        .map_err(ScanError::Client)
}

fn fetch_error(url: &str, source: reqwest::Error) -> ScanError {
    warn!("Request to {url} failed: {source}");
    ScanError::Fetch {
        url: url.to_string(),
        source,
    }
}
