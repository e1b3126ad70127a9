//! Client construction and the login exchange.

use std::time::Duration;

use tracing::debug;

use crate::client::GdClient;
use crate::http::Transport;
use crate::pipeline::Pipeline;
use crate::request::Request;
use crate::routes::{DEFAULT_HOST, Route};
use crate::session::{Credentials, Session};
use crate::{Error, Result};

/// Default time-to-live for cached results.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(15 * 60);

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Device identifier sent with the login exchange.
const CLIENT_UDID: &str = "gdash-rs";

/// Builder for [`GdClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use gd_client::GdClientBuilder;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GdClientBuilder::new()
///     .cache_ttl(Duration::from_secs(60))
///     .request_timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GdClientBuilder {
    host: String,
    cache_ttl: Duration,
    request_timeout: Duration,
}

impl Default for GdClientBuilder {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl GdClientBuilder {
    /// Create a builder with the official host and default tuning.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Target a different server (a private server speaking the same
    /// protocol).
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// How long successful results are served from the cache.
    #[must_use]
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Per-request timeout; expiry is reported as a transport failure.
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build an anonymous client.
    pub fn build(self) -> Result<GdClient> {
        let transport = Transport::new(&self.host, self.request_timeout)?;
        Ok(GdClient::from_pipeline(Pipeline::new(
            transport,
            self.cache_ttl,
            None,
        )))
    }

    /// Log in and build an authenticated client.
    ///
    /// Performs the account login exchange to resolve the account and player
    /// IDs, then fixes them in an immutable [`Session`](crate::Session). The
    /// servers answer bad credentials with their usual sentinel, surfaced
    /// here as [`Error::LoginFailed`].
    pub async fn build_authenticated(self, credentials: Credentials) -> Result<GdClient> {
        if credentials.username.trim().is_empty() {
            return Err(Error::invalid_argument("username must not be empty"));
        }
        if credentials.password.is_empty() {
            return Err(Error::invalid_argument("password must not be empty"));
        }

        let transport = Transport::new(&self.host, self.request_timeout)?;
        let pipeline = Pipeline::new(transport, self.cache_ttl, None);

        let request = Request::new(Route::Login, decode_login)
            .param("userName", credentials.username.clone())
            .param("password", credentials.password.clone())
            .param("udid", CLIENT_UDID);

        let (account_id, player_id) = match pipeline.fetch(request).await {
            Ok(ids) => ids,
            Err(Error::MissingAccess) => return Err(Error::LoginFailed),
            Err(other) => return Err(other),
        };
        debug!(account_id, player_id, "login succeeded");

        let session = Session::new(
            account_id,
            player_id,
            credentials.username,
            credentials.password,
        );
        Ok(GdClient::from_pipeline(pipeline.with_session(session)))
    }
}

/// Decode the `accountID,playerID` login response.
fn decode_login(body: &str) -> gd_format::Result<(u64, u64)> {
    let trimmed = body.trim();
    let (account, player) = trimmed
        .split_once(',')
        .ok_or_else(|| gd_format::Error::malformed(trimmed))?;

    let account_id = account
        .parse()
        .map_err(|_| gd_format::Error::malformed(trimmed))?;
    let player_id = player
        .parse()
        .map_err(|_| gd_format::Error::malformed(trimmed))?;

    Ok((account_id, player_id))
}
