//! Response classification: transport status, sentinel, or decodable body.

use reqwest::StatusCode;

/// The literal body the servers return for any logical failure.
///
/// The same token means "nothing matched" and "access denied"; the protocol
/// gives the client no way to tell which.
pub const SENTINEL: &str = "-1";

/// Classification of one raw transport result.
///
/// Exactly one tag applies per response; decoding happens afterwards and a
/// decoder failure becomes [`crate::Error::CorruptedResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified<'a> {
    /// Transport and server-level success; the body still has to decode.
    Success(&'a str),
    /// The sentinel: no result, or no access.
    LogicalFailure,
    /// Non-success HTTP status.
    TransportFailure(StatusCode),
}

/// Classify a raw status/body pair.
///
/// The order is load-bearing: a transport error is never reinterpreted as a
/// logical failure, and the sentinel is tested before any structural decode
/// is attempted (the literal `-1` would otherwise decode as a one-field map
/// and masquerade as corrupted content).
#[must_use]
pub fn classify(status: StatusCode, body: &str) -> Classified<'_> {
    if !status.is_success() {
        return Classified::TransportFailure(status);
    }
    if body.trim() == SENTINEL {
        return Classified::LogicalFailure;
    }
    Classified::Success(body)
}
