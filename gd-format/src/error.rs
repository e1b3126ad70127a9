//! Error types for response format parsing

use thiserror::Error;

/// Result type for format operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding a server response body
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Odd number of fields: the last key has no value
    #[error("trailing key without value: {key}")]
    TrailingKey { key: String },

    /// A key position held something other than an integer index
    #[error("invalid field index: {index}")]
    InvalidIndex { index: String },

    /// A required field is absent from the entity
    #[error("missing required field {index}")]
    MissingField { index: u8 },

    /// A field value failed to parse as the expected type
    #[error("invalid value for field {index}: {value}")]
    InvalidField { index: u8, value: String },

    /// The pagination trailer was not three numeric fields
    #[error("invalid pagination info: {raw}")]
    InvalidPageInfo { raw: String },

    /// A payload that is not an indexed map failed to match its expected
    /// shape (e.g. the `accountID,playerID` login response)
    #[error("malformed payload: {raw}")]
    Malformed { raw: String },
}

impl Error {
    /// Create an invalid field error
    pub fn invalid_field(index: u8, value: impl Into<String>) -> Self {
        Self::InvalidField {
            index,
            value: value.into(),
        }
    }

    /// Create an invalid pagination info error
    pub fn invalid_page_info(raw: impl Into<String>) -> Self {
        Self::InvalidPageInfo { raw: raw.into() }
    }

    /// Create a malformed payload error
    pub fn malformed(raw: impl Into<String>) -> Self {
        Self::Malformed { raw: raw.into() }
    }
}
