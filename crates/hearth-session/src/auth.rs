//! The seam between session state and the authentication backend.
//!
//! Hearth doesn't talk to any particular backend itself. It defines the
//! [`AuthClient`] trait: three async calls that either produce a session
//! token and user, or an [`AuthError`]. `hearth-transport` provides an
//! HTTP implementation and an in-process one for development; tests
//! provide their own scripted clients.

use std::future::Future;
use std::sync::Arc;

use hearth_protocol::{AuthResponse, Credentials, CurrentUserResponse, Registration};

use crate::AuthError;

/// Talks to the authentication backend on behalf of the session manager.
///
/// # Trait bounds
///
/// - `Send + Sync` → the client can be shared across async tasks.
/// - `'static` → it lives as long as the application context that owns it.
///
/// # Example
///
/// ```rust
/// use hearth_protocol::{
///     AuthResponse, Credentials, CurrentUserResponse, Registration,
/// };
/// use hearth_session::{AuthClient, AuthError};
///
/// /// A backend that is always down.
/// struct Offline;
///
/// impl AuthClient for Offline {
///     async fn login(&self, _: &Credentials) -> Result<AuthResponse, AuthError> {
///         Err(AuthError::Network("offline".into()))
///     }
///
///     async fn register(&self, _: &Registration) -> Result<AuthResponse, AuthError> {
///         Err(AuthError::Network("offline".into()))
///     }
///
///     async fn current_user(&self, _: &str) -> Result<CurrentUserResponse, AuthError> {
///         Err(AuthError::Network("offline".into()))
///     }
/// }
/// ```
pub trait AuthClient: Send + Sync + 'static {
    /// Exchanges email/password for a session token and user.
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<AuthResponse, AuthError>> + Send;

    /// Creates an account and returns its first session token and user.
    fn register(
        &self,
        registration: &Registration,
    ) -> impl Future<Output = Result<AuthResponse, AuthError>> + Send;

    /// Fetches the user a previously issued token belongs to.
    ///
    /// # Returns
    /// - `Ok(CurrentUserResponse)`: the token is still good
    /// - `Err(AuthError::Rejected { .. })`: the token is invalid/expired
    fn current_user(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<CurrentUserResponse, AuthError>> + Send;
}

/// One backend shared by several session managers.
impl<T: AuthClient> AuthClient for Arc<T> {
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<AuthResponse, AuthError>> + Send {
        (**self).login(credentials)
    }

    fn register(
        &self,
        registration: &Registration,
    ) -> impl Future<Output = Result<AuthResponse, AuthError>> + Send {
        (**self).register(registration)
    }

    fn current_user(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<CurrentUserResponse, AuthError>> + Send {
        (**self).current_user(token)
    }
}
