//! The fetch pipeline: cache → inject → dispatch → classify → decode → store.

use std::time::Duration;

use tracing::{debug, warn};

use crate::cache::ResponseCache;
use crate::http::Transport;
use crate::request::Request;
use crate::response::{Classified, classify};
use crate::routes::{BINARY_VERSION, GAME_VERSION, Route};
use crate::session::Session;
use crate::{Error, Result};

pub(crate) struct Pipeline {
    transport: Transport,
    cache: ResponseCache,
    cache_ttl: Duration,
    session: Option<Session>,
}

impl Pipeline {
    pub(crate) fn new(transport: Transport, cache_ttl: Duration, session: Option<Session>) -> Self {
        Self {
            transport,
            cache: ResponseCache::new(),
            cache_ttl,
            session,
        }
    }

    /// Rebuild this pipeline with a session attached (post-login).
    pub(crate) fn with_session(self, session: Session) -> Self {
        Self {
            session: Some(session),
            ..self
        }
    }

    pub(crate) fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub(crate) fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Cache key for a request, scoped to the account the client is logged
    /// into. The same nominal request by two accounts can yield different,
    /// account-scoped results (private messages, blocked lists), so the
    /// scope is part of the identity.
    fn scoped_fingerprint<T>(&self, request: &Request<T>) -> Option<String> {
        request.cache_fingerprint().map(|mut fingerprint| {
            fingerprint.push('@');
            match &self.session {
                Some(session) => fingerprint.push_str(&session.account_id().to_string()),
                None => fingerprint.push_str("anon"),
            }
            fingerprint
        })
    }

    /// Execute one request through the full pipeline.
    ///
    /// Steps, in order: cache lookup (fresh hit returns immediately),
    /// credential injection, transport dispatch bounded by the request
    /// timeout, classification, decode, cache store. Failures of any kind
    /// are never cached and never retried here.
    pub(crate) async fn fetch<T>(&self, request: Request<T>) -> Result<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let fingerprint = self.scoped_fingerprint(&request);
        if let Some(key) = fingerprint.as_deref() {
            if let Some(cached) = self.cache.get::<T>(key) {
                debug!(route = ?request.route(), "serving cached response");
                return Ok(cached);
            }
        }

        let mut params: Vec<(&'static str, String)> = vec![
            ("gameVersion", GAME_VERSION.to_string()),
            ("binaryVersion", BINARY_VERSION.to_string()),
            ("gdw", "0".to_string()),
        ];
        params.extend(request.params().iter().cloned());
        // The login exchange authenticates with the plaintext password; the
        // session hook applies to every other route.
        if request.route() != Route::Login {
            if let Some(session) = &self.session {
                session.inject(&mut params);
            }
        }
        params.push(("secret", request.route().secret().to_string()));

        let (status, body) = self
            .transport
            .post_form(request.route().as_path(), &params)
            .await?;

        match classify(status, &body) {
            Classified::TransportFailure(status) => {
                warn!(route = ?request.route(), %status, "transport failure");
                return Err(Error::bad_status(status));
            }
            Classified::LogicalFailure => {
                debug!(route = ?request.route(), "server returned the failure sentinel");
                return Err(Error::MissingAccess);
            }
            Classified::Success(_) => {}
        }

        match request.decode(&body) {
            Ok(value) => {
                if let Some(key) = fingerprint {
                    self.cache.insert(key, value.clone(), self.cache_ttl);
                }
                Ok(value)
            }
            Err(source) => {
                warn!(route = ?request.route(), %source, "undecodable response body");
                Err(Error::corrupted(body, source))
            }
        }
    }
}
