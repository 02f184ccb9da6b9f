//! Auth backend clients for Hearth.
//!
//! Provides [`AuthClient`](hearth_session::AuthClient) implementations:
//!
//! - [`HttpAuthClient`]: JSON over HTTP via `reqwest` (feature `http`,
//!   on by default)
//! - [`LocalAuthClient`]: an in-process account registry for development,
//!   demos and tests
//!
//! # Feature Flags
//!
//! - `http` (default): the reqwest-backed client

mod error;
#[cfg(feature = "http")]
mod http;
mod local;

pub use error::TransportError;
#[cfg(feature = "http")]
pub use http::{HttpAuthClient, HttpClientConfig};
pub use local::LocalAuthClient;
