//! Error types for PayOnce operations.

/// Errors produced by invoice construction and unlock-URL decoding.
#[derive(thiserror::Error, Debug)]
pub enum PayonceError {
    /// A required request field is absent or empty.
    #[error("invalid invoice request: {0}")]
    InvalidRequest(String),

    /// Payload serialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// An unlock URL or encoded id could not be decoded.
    #[error("invalid unlock url: {0}")]
    InvalidUrl(String),

    /// Signature material was malformed.
    #[error("cryptographic error: {0}")]
    Crypto(String),
}

impl From<serde_json::Error> for PayonceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
