//! Error types for the protocol layer.
//!
//! Each crate in Hearth defines its own error enum. A `ProtocolError`
//! always means the bytes and the types disagreed, never that the
//! network or the backend misbehaved.

/// Errors that can occur in the protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a Rust value into bytes).
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning bytes into a Rust value).
    ///
    /// Common causes: an HTML error page where JSON was expected,
    /// missing required fields, or a truncated body.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The body decoded but violates a protocol rule, e.g. an auth
    /// response with an empty token.
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}
