//! Request descriptors: one immutable value per logical operation.

use crate::routes::Route;

/// Decoder from a raw response body to a typed result.
pub type Decoder<T> = fn(&str) -> gd_format::Result<T>;

/// Immutable description of one remote operation prior to dispatch.
///
/// A descriptor carries only the operation-specific parameters. Uniform
/// protocol parameters (`gameVersion`, `secret`, ...) and session credentials
/// are attached by the pipeline at dispatch time, so operation code never
/// mentions authentication.
///
/// # Example
///
/// ```
/// use gd_client::{Request, routes::Route};
///
/// let request = Request::new(Route::MessageInbox, |_body| Ok(()))
///     .param("page", "0")
///     .param("total", "0");
/// assert_eq!(request.params().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Request<T> {
    route: Route,
    params: Vec<(&'static str, String)>,
    decoder: Decoder<T>,
}

/// Parameters that carry credentials and must never appear in a cache key.
const SECRET_PARAMS: &[&str] = &["gjp", "password", "secret"];

impl<T> Request<T> {
    /// Create a descriptor for `route` decoding responses with `decoder`.
    pub fn new(route: Route, decoder: Decoder<T>) -> Self {
        Self {
            route,
            params: Vec::new(),
            decoder,
        }
    }

    /// Append one parameter. Order is preserved on the wire.
    #[must_use]
    pub fn param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    /// The target route.
    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }

    /// The operation-specific parameters, in insertion order.
    #[must_use]
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Run the response decoder against a raw body.
    pub(crate) fn decode(&self, body: &str) -> gd_format::Result<T> {
        (self.decoder)(body)
    }

    /// Cache identity of this request, or `None` for non-cacheable routes.
    ///
    /// The fingerprint covers the endpoint path and every parameter except
    /// credential material, so tokens never leak into keys or logs. The
    /// account scope is appended by the pipeline; two sessions never share an
    /// entry even for nominally identical requests.
    #[must_use]
    pub fn cache_fingerprint(&self) -> Option<String> {
        if !self.route.is_cacheable() {
            return None;
        }

        let mut fingerprint = self.route.as_path().to_string();
        for (name, value) in &self.params {
            if SECRET_PARAMS.contains(name) {
                continue;
            }
            fingerprint.push('&');
            fingerprint.push_str(name);
            fingerprint.push('=');
            fingerprint.push_str(value);
        }
        Some(fingerprint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &str) -> gd_format::Result<()> {
        Ok(())
    }

    #[test]
    fn test_params_preserve_order() {
        let request = Request::new(Route::LevelSearch, noop)
            .param("str", "bloodbath")
            .param("type", "0")
            .param("page", "2");
        let names: Vec<&str> = request.params().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["str", "type", "page"]);
    }

    #[test]
    fn test_fingerprint_distinguishes_params() {
        let page0 = Request::new(Route::MessageInbox, noop).param("page", "0");
        let page1 = Request::new(Route::MessageInbox, noop).param("page", "1");
        assert_ne!(page0.cache_fingerprint(), page1.cache_fingerprint());
    }

    #[test]
    fn test_fingerprint_excludes_credentials() {
        let request = Request::new(Route::MessageInbox, noop)
            .param("page", "0")
            .param("gjp", "R1JGRg==")
            .param("secret", "Wmfd2893gb7");
        let fingerprint = request.cache_fingerprint().unwrap();
        assert!(!fingerprint.contains("R1JGRg"));
        assert!(!fingerprint.contains("Wmfd"));
        assert!(fingerprint.contains("page=0"));
    }

    #[test]
    fn test_mutating_request_has_no_fingerprint() {
        let request = Request::new(Route::MessageSend, noop).param("toAccountID", "98006");
        assert!(request.cache_fingerprint().is_none());
    }
}
