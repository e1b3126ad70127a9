//! Domain entities and their field-level decoders.
//!
//! Entities arrive as indexed field maps (see [`gd_format`]); each module
//! here owns one entity type plus the decoders for the endpoints that return
//! it. The field indexes are what the live servers emit; unknown indexes are
//! ignored so newer server revisions do not break decoding.

pub mod level;
pub mod message;
pub mod user;

pub use level::{GdLevel, LevelLength};
pub use message::GdMessage;
pub use user::GdUser;

use base64::Engine;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};

/// Decode a URL-safe base64 text field (message subjects, level
/// descriptions). The official servers pad; several private servers do not,
/// so both variants are accepted.
pub(crate) fn decode_base64_text(index: u8, value: &str) -> gd_format::Result<String> {
    let bytes = URL_SAFE
        .decode(value)
        .or_else(|_| URL_SAFE_NO_PAD.decode(value))
        .map_err(|_| gd_format::Error::invalid_field(index, value))?;
    String::from_utf8(bytes).map_err(|_| gd_format::Error::invalid_field(index, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_base64_text_padded_and_unpadded() {
        // "Hello" => "SGVsbG8=" padded, "SGVsbG8" unpadded
        assert_eq!(decode_base64_text(4, "SGVsbG8=").unwrap(), "Hello");
        assert_eq!(decode_base64_text(4, "SGVsbG8").unwrap(), "Hello");
    }

    #[test]
    fn test_decode_base64_text_rejects_garbage() {
        let err = decode_base64_text(4, "!!not base64!!").unwrap_err();
        assert_eq!(err, gd_format::Error::invalid_field(4, "!!not base64!!"));
    }
}
