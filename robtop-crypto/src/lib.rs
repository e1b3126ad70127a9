//! RobTop's weak obfuscation schemes for the Geometry Dash servers.
//!
//! The Geometry Dash API does not use real cryptography. Credentials and a
//! few payload fields are scrambled with a cyclic XOR against a short,
//! publicly known numeric key, then wrapped in URL-safe base64. The servers
//! recompute the exact same transform, so this crate reproduces the published
//! scheme bit-for-bit rather than substituting anything stronger.
//!
//! This crate provides:
//! - The cyclic XOR primitive shared by every scheme
//! - Account password encoding ("GJP" token)
//! - Private message body scrambling
//! - Level password decoding
//!
//! # Quick Start
//!
//! ```
//! use robtop_crypto::{decode_gd_account_password, encode_gd_account_password};
//!
//! let gjp = encode_gd_account_password("hunter2");
//! assert_eq!(decode_gd_account_password(&gjp)?, "hunter2");
//! # Ok::<(), robtop_crypto::CryptoError>(())
//! ```

pub mod codec;
pub mod error;
pub mod xor;

pub use codec::{
    ACCOUNT_PASSWORD_XOR_KEY, LEVEL_PASSWORD_XOR_KEY, MESSAGE_BODY_XOR_KEY,
    decode_gd_account_password, decode_gd_message_body, decode_level_password,
    encode_gd_account_password, encode_gd_message_body,
};
pub use error::CryptoError;
pub use xor::xor_cipher;

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CryptoError>;
