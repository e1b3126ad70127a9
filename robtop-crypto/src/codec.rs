//! Encode/decode routines for the individual obfuscation schemes.
//!
//! Every scheme is the same two-step construction with a different XOR key:
//! scramble the UTF-8 bytes with [`xor_cipher`], then encode with URL-safe
//! base64 (padded, matching what the game client transmits).

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;

use crate::{Result, xor::xor_cipher};

/// XOR key for account passwords (the `gjp` form field).
pub const ACCOUNT_PASSWORD_XOR_KEY: &[u8] = b"37526";

/// XOR key for private message bodies.
pub const MESSAGE_BODY_XOR_KEY: &[u8] = b"14251";

/// XOR key for copy-protected level passwords.
pub const LEVEL_PASSWORD_XOR_KEY: &[u8] = b"26364";

fn encode(plaintext: &str, key: &[u8]) -> String {
    URL_SAFE.encode(xor_cipher(plaintext.as_bytes(), key))
}

fn decode(encoded: &str, key: &[u8]) -> Result<String> {
    let scrambled = URL_SAFE.decode(encoded)?;
    Ok(String::from_utf8(xor_cipher(&scrambled, key))?)
}

/// Encode an account password into the `gjp` credential token.
///
/// Pure and deterministic, never fails: any UTF-8 password (including the
/// empty string) maps to exactly one token. The servers compare against the
/// same transform, so the output must not deviate from the published scheme.
#[must_use]
pub fn encode_gd_account_password(password: &str) -> String {
    encode(password, ACCOUNT_PASSWORD_XOR_KEY)
}

/// Recover the plaintext account password from a `gjp` token.
pub fn decode_gd_account_password(gjp: &str) -> Result<String> {
    decode(gjp, ACCOUNT_PASSWORD_XOR_KEY)
}

/// Scramble a private message body for upload.
#[must_use]
pub fn encode_gd_message_body(body: &str) -> String {
    encode(body, MESSAGE_BODY_XOR_KEY)
}

/// Descramble a private message body as returned by the message download
/// endpoint.
pub fn decode_gd_message_body(encoded: &str) -> Result<String> {
    decode(encoded, MESSAGE_BODY_XOR_KEY)
}

/// Decode the password of a copyable level.
pub fn decode_level_password(encoded: &str) -> Result<String> {
    decode(encoded, LEVEL_PASSWORD_XOR_KEY)
}
