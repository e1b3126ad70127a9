//! Error types for the Geometry Dash client

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by client operations.
///
/// Remote failures collapse into exactly four kinds: [`Error::BadResponse`],
/// [`Error::MissingAccess`], [`Error::CorruptedResponse`], and the
/// synchronous argument rejections. Callers never need to distinguish finer
/// remote-side detail because the protocol does not expose any.
#[derive(Error, Debug)]
pub enum Error {
    /// A structurally invalid argument, rejected before any request is built.
    /// Never the result of a network exchange.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// An authenticated-only operation was called on an anonymous client.
    #[error("this operation requires an authenticated client")]
    NotAuthenticated,

    /// The HTTP exchange failed: a non-success status, a connection error,
    /// or the request timeout elapsing. `status` is `None` when the failure
    /// happened below the HTTP layer. Safe to retry at the caller's
    /// discretion.
    #[error("bad response from the server (status: {status:?})")]
    BadResponse {
        status: Option<StatusCode>,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The server answered with its `-1` sentinel. The service uses the same
    /// literal for "nothing matched" and "access denied"; the two cannot be
    /// told apart from the client side.
    #[error("no result found or access denied")]
    MissingAccess,

    /// The exchange succeeded but the body did not decode against the
    /// expected shape. Usually protocol drift or a divergent private server;
    /// retrying will not help. The raw body is kept for diagnostics.
    #[error("corrupted response content: {source}")]
    CorruptedResponse {
        body: String,
        #[source]
        source: gd_format::Error,
    },

    /// The server rejected the credentials during the login exchange.
    #[error("login failed: the server rejected the credentials")]
    LoginFailed,

    /// The configured host is not a valid URL.
    #[error("invalid host URL: {0}")]
    InvalidHost(#[from] url::ParseError),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Create a bad response error from an HTTP status
    pub fn bad_status(status: StatusCode) -> Self {
        Self::BadResponse {
            status: Some(status),
            source: None,
        }
    }

    /// Create a corrupted response error keeping the raw body
    pub fn corrupted(body: impl Into<String>, source: gd_format::Error) -> Self {
        Self::CorruptedResponse {
            body: body.into(),
            source,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Self::BadResponse {
            status: source.status(),
            source: Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_argument("star rating must be between 1 and 10");
        assert_eq!(
            err.to_string(),
            "invalid argument: star rating must be between 1 and 10"
        );

        let err = Error::bad_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("500"));

        assert_eq!(
            Error::MissingAccess.to_string(),
            "no result found or access denied"
        );
    }

    #[test]
    fn test_corrupted_keeps_body() {
        let err = Error::corrupted("1:2:3", gd_format::Error::MissingField { index: 16 });
        match err {
            Error::CorruptedResponse { body, .. } => assert_eq!(body, "1:2:3"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
