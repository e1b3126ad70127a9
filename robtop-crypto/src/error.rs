//! Error types for robtop-crypto operations.

use thiserror::Error;

/// Errors that can occur while reversing an obfuscated value.
///
/// Encoding never fails: every scheme is a total transform over arbitrary
/// bytes. Decoding can fail because the input comes off the wire.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Input was not valid URL-safe base64.
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// Descrambled bytes were not valid UTF-8.
    #[error("descrambled payload is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
