//! Session types: configuration, the observable snapshot, and the outcome
//! of a login/signup attempt.

use hearth_protocol::User;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Configuration for session behavior.
///
/// `#[serde(default)]` lets a config file mention only the fields it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// The key the session token is stored under in the [`TokenStore`].
    ///
    /// Default: `"token"`.
    ///
    /// [`TokenStore`]: crate::TokenStore
    pub token_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: "token".to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// SessionSnapshot
// ---------------------------------------------------------------------------

/// What a UI consumer can see of the session at one instant.
///
/// Published through a `tokio::sync::watch` channel every time the
/// session changes, so views can re-render without polling.
///
/// ```text
///   is_loading: true ──(restore finishes)──→ is_loading: false
///   user: None ──(login/signup/restore ok)──→ user: Some(..)
///   user: Some(..) ──(logout/restore fails)──→ user: None
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub user: Option<User>,

    /// Always equal to `user.is_some()`.
    pub is_authenticated: bool,

    /// `true` until the startup restore has finished.
    pub is_loading: bool,
}

impl SessionSnapshot {
    /// The snapshot before anything has happened: no user, still loading.
    pub fn initial() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: true,
        }
    }
}

// ---------------------------------------------------------------------------
// AuthResult
// ---------------------------------------------------------------------------

/// Outcome of [`login`](crate::SessionManager::login) or
/// [`signup`](crate::SessionManager::signup).
///
/// Exactly one variant is ever populated, so there's no way to read a
/// user out of a failed attempt or a message out of a successful one
/// without matching first.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    /// The backend accepted; the session is now active for this user.
    Success(User),

    /// The attempt failed. The message is suitable for display, when
    /// one could be derived.
    Failure(Option<String>),
}

impl AuthResult {
    /// Returns `true` for [`AuthResult::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The authenticated user, if the attempt succeeded.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Success(user) => Some(user),
            Self::Failure(_) => None,
        }
    }

    /// The display message, if the attempt failed with one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => message.as_deref(),
        }
    }
}
