//! Turning auth errors into text a person can read.

use crate::AuthError;

/// Shown when the backend could not be reached at all.
pub const NETWORK_MESSAGE: &str =
    "Unable to reach the server. Check your connection and try again.";

/// Shown when the backend answered with something unparseable.
pub const INVALID_RESPONSE_MESSAGE: &str =
    "The server sent an unexpected response. Please try again.";

/// Derives the display message for a failed login or signup.
///
/// The backend's own wording wins when it supplied one. A rejection
/// without a message yields `None` and the UI picks its own wording.
pub fn error_message(err: &AuthError) -> Option<String> {
    match err {
        AuthError::Rejected { message, .. } => message.clone(),
        AuthError::Network(_) => Some(NETWORK_MESSAGE.to_owned()),
        AuthError::InvalidResponse(_) => {
            Some(INVALID_RESPONSE_MESSAGE.to_owned())
        }
    }
}
