//! Client-side session management for Hearth.
//!
//! This crate owns "who is logged in" on the client:
//!
//! 1. **Backend access**: the [`AuthClient`] trait (login, register,
//!    current user). Implementations live in `hearth-transport`.
//! 2. **Token persistence**: the [`TokenStore`] trait, with
//!    [`MemoryTokenStore`] and [`FileTokenStore`] provided.
//! 3. **Session state**: [`SessionManager`]: restores a stored session at
//!    startup, performs login/signup/logout, and publishes
//!    [`SessionSnapshot`]s to subscribers.
//!
//! # How it fits in the stack
//!
//! ```text
//! UI / AppContext (above)  ← reads snapshots, calls login/signup/logout
//!     ↕
//! Session Layer (this crate)  ← owns current user and the stored token
//!     ↕
//! Protocol Layer (below)  ← provides User, Credentials, AuthResponse
//! ```
//!
//! Nothing in this crate's runtime surface returns an error to the UI:
//! login/signup produce an [`AuthResult`], and a failed restore quietly
//! degrades to "logged out".

mod auth;
mod error;
mod manager;
mod message;
mod session;
mod store;

pub use auth::AuthClient;
pub use error::AuthError;
pub use manager::SessionManager;
pub use message::{INVALID_RESPONSE_MESSAGE, NETWORK_MESSAGE, error_message};
pub use session::{AuthResult, SessionConfig, SessionSnapshot};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
