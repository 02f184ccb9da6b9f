//! Error types for the session layer.

use hearth_protocol::ProtocolError;

/// Errors an [`AuthClient`](crate::AuthClient) can report.
///
/// These never reach the UI directly. The [`SessionManager`](crate::SessionManager)
/// turns them into an [`AuthResult::Failure`](crate::AuthResult::Failure)
/// (login/signup) or a logged-out state (restore).
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The backend answered, but said no: wrong password, expired token,
    /// email already taken.
    ///
    /// `message` is whatever human-readable text the backend supplied.
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The backend could not be reached (DNS, refused connection, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a body we couldn't make sense of.
    #[error("invalid response: {0}")]
    InvalidResponse(#[from] ProtocolError),
}

impl AuthError {
    /// Shorthand for a rejection carrying a backend message.
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: Some(message.into()),
        }
    }

    /// Returns `true` if the backend explicitly refused the request.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
