//! The session manager: owns the current user and the stored token.
//!
//! It's responsible for:
//! - Restoring a stored session once at startup
//! - Logging in and signing up through the [`AuthClient`]
//! - Persisting and deleting the token in the [`TokenStore`]
//! - Publishing a [`SessionSnapshot`] after every change
//!
//! # Concurrency note
//!
//! Every state-changing operation takes `&mut self`, so two logins can't
//! interleave on the same manager. When the manager is shared (see
//! `hearth::AppContext`) it sits behind a `tokio::sync::Mutex`, which
//! makes concurrent login/signup calls run one after another.
//!
//! State is only touched after the backend call returns. Dropping an
//! in-flight `login` future therefore leaves the session exactly as it
//! was.

use hearth_protocol::{AuthResponse, Credentials, Registration, User};
use tokio::sync::watch;

use crate::{
    AuthClient, AuthResult, SessionConfig, SessionSnapshot, TokenStore,
    error_message,
};

/// Client-side session state.
///
/// ## Lifecycle
///
/// ```text
/// new() ──→ restore_session() ──→ login()/signup() ──→ logout()
///  │               │                     │                 │
///  ▼               ▼                     ▼                 ▼
/// [Loading]   [Anonymous |          [Authenticated]    [Anonymous]
///              Authenticated]
/// ```
pub struct SessionManager<A: AuthClient, S: TokenStore> {
    client: A,
    store: S,
    config: SessionConfig,

    /// The logged-in user. `is_authenticated` is derived from this and
    /// never stored separately.
    user: Option<User>,

    /// `true` until `restore_session` has finished once.
    is_loading: bool,

    /// Latest snapshot, for subscribers. `send_replace` works with zero
    /// receivers, so publishing never fails.
    updates: watch::Sender<SessionSnapshot>,
}

impl<A: AuthClient, S: TokenStore> SessionManager<A, S> {
    /// Creates a manager in the loading state with no user.
    pub fn new(client: A, store: S, config: SessionConfig) -> Self {
        let (updates, _) = watch::channel(SessionSnapshot::initial());
        Self {
            client,
            store,
            config,
            user: None,
            is_loading: true,
            updates,
        }
    }

    /// Restores the session from a stored token. Call once at startup.
    ///
    /// - No stored token: finishes loading as anonymous, no network call.
    /// - Token accepted: the returned user becomes the current user.
    /// - Token refused, or backend unreachable: the token is deleted and
    ///   the session stays anonymous. The failure is logged, never returned.
    ///
    /// Only the first call does anything; later calls are ignored. A
    /// login or signup that completes first also ends loading, so a late
    /// restore never replaces a session started in this run.
    pub async fn restore_session(&mut self) {
        if !self.is_loading {
            tracing::debug!("session already restored, skipping");
            return;
        }

        match self.store.get(&self.config.token_key) {
            None => {
                tracing::debug!("no stored token, starting anonymous");
            }
            Some(token) => match self.client.current_user(&token).await {
                Ok(resp) => {
                    tracing::info!(user_id = %resp.user.id, "session restored");
                    self.user = Some(resp.user);
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "stored session is no longer valid, clearing token"
                    );
                    self.user = None;
                    self.store.remove(&self.config.token_key);
                }
            },
        }

        self.is_loading = false;
        self.publish();
    }

    /// Logs in with email and password.
    ///
    /// Inputs are passed to the backend as-is; validation is its job.
    /// On failure nothing changes: the previous user (if any) and the
    /// stored token are left alone.
    pub async fn login(&mut self, email: &str, password: &str) -> AuthResult {
        let credentials = Credentials {
            email: email.to_owned(),
            password: password.to_owned(),
        };

        match self.client.login(&credentials).await {
            Ok(resp) => self.start_session(resp),
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                AuthResult::Failure(error_message(&e))
            }
        }
    }

    /// Creates an account and logs it in.
    ///
    /// Same failure behavior as [`login`](Self::login).
    pub async fn signup(
        &mut self,
        name: &str,
        mobile: &str,
        email: &str,
        password: &str,
    ) -> AuthResult {
        let registration = Registration {
            name: name.to_owned(),
            mobile: mobile.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };

        match self.client.register(&registration).await {
            Ok(resp) => self.start_session(resp),
            Err(e) => {
                tracing::warn!(error = %e, "signup failed");
                AuthResult::Failure(error_message(&e))
            }
        }
    }

    /// Ends the session: deletes the token and forgets the user.
    ///
    /// Local only, no backend call, always succeeds.
    pub fn logout(&mut self) {
        self.store.remove(&self.config.token_key);
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "logged out");
        }
        self.publish();
    }

    /// The logged-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// `true` whenever there is a current user.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// `true` until the startup restore has finished.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The current state as one value.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user: self.user.clone(),
            is_authenticated: self.is_authenticated(),
            is_loading: self.is_loading,
        }
    }

    /// Returns a receiver that sees every future snapshot.
    ///
    /// The receiver starts out holding the current snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.updates.subscribe()
    }

    /// The token store this manager writes to.
    pub fn token_store(&self) -> &S {
        &self.store
    }

    /// The backend client this manager calls.
    pub fn client(&self) -> &A {
        &self.client
    }

    /// Persists the token and adopts the user from a successful
    /// login/signup response.
    fn start_session(&mut self, resp: AuthResponse) -> AuthResult {
        let AuthResponse { token, user } = resp;

        self.store.set(&self.config.token_key, &token);
        tracing::info!(user_id = %user.id, "session started");

        self.user = Some(user.clone());
        self.is_loading = false;
        self.publish();
        AuthResult::Success(user)
    }

    fn publish(&self) {
        self.updates.send_replace(self.snapshot());
    }
}

// =========================================================================
// Tests
// =========================================================================
