//! Data model and wire format for Hearth.
//!
//! This crate defines the shapes that travel between the client state
//! providers and an authentication backend:
//!
//! - **Types** ([`User`], [`Credentials`], [`AuthResponse`], etc.):
//!   the account model and request/response bodies.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): how those bodies are
//!   converted to/from bytes.
//! - **Errors** ([`ProtocolError`]): what can go wrong during
//!   encoding/decoding.
//!
//! # Architecture
//!
//! The protocol layer sits below both the transport (which moves bytes)
//! and the session layer (which owns the current user). It knows nothing
//! about tokens being stored or users being "logged in", only how the
//! data looks.
//!
//! ```text
//! Transport (HTTP bytes) → Protocol (AuthResponse) → Session (current user)
//! ```

mod codec;
mod error;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use types::{
    AuthResponse, Credentials, CurrentUserResponse, ErrorBody, Registration,
    User, UserId,
};
