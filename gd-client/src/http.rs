//! HTTP transport for the Geometry Dash protocol.
//!
//! Everything the servers expose is a `POST` with form-encoded parameters.
//! This module owns the single shared connection pool and the per-request
//! timeout; everything above it works on `(status, body)` pairs.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, trace};
use url::Url;

use crate::Result;

#[derive(Debug, Clone)]
pub(crate) struct Transport {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl Transport {
    /// Create a transport for `host` with a per-request `timeout`.
    pub(crate) fn new(host: &str, timeout: Duration) -> Result<Self> {
        // Validate eagerly so a bad host fails at build time, not first call.
        Url::parse(host)?;
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url: host.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Dispatch one form-encoded POST, bounded by the configured timeout.
    ///
    /// Timeout expiry surfaces as a `reqwest` error and is folded into the
    /// same transport-failure kind as any other connection-level problem.
    pub(crate) async fn post_form(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<(StatusCode, String)> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, params = params.len(), "dispatching request");

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        trace!(%status, bytes = body.len(), "response received");

        Ok((status, body))
    }
}
