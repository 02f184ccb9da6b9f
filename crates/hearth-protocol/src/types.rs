//! Account model and auth request/response bodies.
//!
//! Every type here is what the backend sends or receives. The session
//! layer stores a [`User`]; the transport layer serializes
//! [`Credentials`]/[`Registration`] and parses [`AuthResponse`].

use serde::{Deserialize, Serialize};

use std::fmt;

use crate::ProtocolError;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// A backend-assigned account identifier.
///
/// Newtype over `String` so an id can't be confused with an email or a
/// token. `#[serde(transparent)]` keeps the wire form a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// An authenticated account.
///
/// Some backends serialize the identifier as `_id` (document stores);
/// both spellings are accepted on input, `id` is written on output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: UserId,

    /// Display name.
    pub name: String,

    pub email: String,

    /// Mobile phone number, as entered at signup.
    #[serde(default)]
    pub mobile: String,
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Body of a login request.
///
/// `Debug` is written by hand so passwords never end up in logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of a registration (signup) request.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("mobile", &self.mobile)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Successful login or registration: a fresh session token plus the user
/// it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

impl AuthResponse {
    /// Rejects responses that decoded fine but can't start a session.
    ///
    /// # Errors
    /// Returns [`ProtocolError::InvalidMessage`] if the token is blank.
    pub fn validate(self) -> Result<Self, ProtocolError> {
        if self.token.trim().is_empty() {
            return Err(ProtocolError::InvalidMessage(
                "auth response carried an empty token".into(),
            ));
        }
        Ok(self)
    }
}

/// Response to a "who am I" request made with a stored token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub user: User,
}

/// Error body returned by the backend alongside a non-success status.
///
/// Backends disagree on the field name, so both `message` and `error`
/// are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Returns the first non-blank message, preferring `message`.
    pub fn into_message(self) -> Option<String> {
        [self.message, self.error]
            .into_iter()
            .flatten()
            .map(|m| m.trim().to_owned())
            .find(|m| !m.is_empty())
    }
}
