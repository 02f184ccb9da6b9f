//! An in-process auth backend.
//!
//! [`LocalAuthClient`] keeps accounts and issued tokens in memory and
//! answers the way a real backend would, including its error messages.
//! Use it for demos, local development without a server, and tests that
//! need more than a scripted reply.
//!
//! Passwords are compared in plain text. Never ship this as a real backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use hearth_protocol::{
    AuthResponse, Credentials, CurrentUserResponse, Registration, User, UserId,
};
use hearth_session::{AuthClient, AuthError};
use rand::Rng;

#[derive(Debug)]
struct Account {
    password: String,
    user: User,
}

#[derive(Debug, Default)]
struct Registry {
    /// Accounts keyed by email.
    accounts: HashMap<String, Account>,

    /// Issued session tokens → account email.
    sessions: HashMap<String, String>,
}

/// In-memory [`AuthClient`] with real-looking accounts and sessions.
#[derive(Debug, Default)]
pub struct LocalAuthClient {
    registry: Mutex<Registry>,
    next_id: AtomicU64,
}

impl LocalAuthClient {
    /// Creates a backend with no accounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: pre-registers an account.
    pub fn with_account(
        self,
        name: &str,
        mobile: &str,
        email: &str,
        password: &str,
    ) -> Self {
        let user = self.new_user(name, mobile, email);
        self.registry().accounts.insert(
            email.to_owned(),
            Account {
                password: password.to_owned(),
                user,
            },
        );
        self
    }

    /// Number of registered accounts.
    pub fn account_count(&self) -> usize {
        self.registry().accounts.len()
    }

    /// Number of tokens currently honored.
    pub fn active_sessions(&self) -> usize {
        self.registry().sessions.len()
    }

    /// Invalidates every issued token, as if the server restarted with a
    /// new signing key.
    pub fn revoke_all(&self) {
        let mut registry = self.registry();
        let revoked = registry.sessions.len();
        registry.sessions.clear();
        tracing::info!(revoked, "all local sessions revoked");
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn new_user(&self, name: &str, mobile: &str, email: &str) -> User {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        User {
            id: UserId(format!("local-{id}")),
            name: name.to_owned(),
            email: email.to_owned(),
            mobile: mobile.to_owned(),
        }
    }

    fn issue(registry: &mut Registry, user: User) -> AuthResponse {
        let token = generate_token();
        registry.sessions.insert(token.clone(), user.email.clone());
        AuthResponse { token, user }
    }
}

impl AuthClient for LocalAuthClient {
    async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthResponse, AuthError> {
        let mut registry = self.registry();

        let user = match registry.accounts.get(&credentials.email) {
            Some(account) if account.password == credentials.password => {
                account.user.clone()
            }
            _ => {
                return Err(AuthError::rejected(401, "Invalid email or password"));
            }
        };

        tracing::debug!(user_id = %user.id, "local login accepted");
        Ok(Self::issue(&mut registry, user))
    }

    async fn register(
        &self,
        registration: &Registration,
    ) -> Result<AuthResponse, AuthError> {
        if registration.email.trim().is_empty()
            || registration.password.is_empty()
        {
            return Err(AuthError::rejected(
                422,
                "Email and password are required",
            ));
        }

        let mut registry = self.registry();

        if registry.accounts.contains_key(&registration.email) {
            return Err(AuthError::rejected(
                409,
                "An account with this email already exists",
            ));
        }

        let user = self.new_user(
            &registration.name,
            &registration.mobile,
            &registration.email,
        );

        registry.accounts.insert(
            registration.email.clone(),
            Account {
                password: registration.password.clone(),
                user: user.clone(),
            },
        );

        tracing::debug!(user_id = %user.id, "local account created");
        Ok(Self::issue(&mut registry, user))
    }

    async fn current_user(
        &self,
        token: &str,
    ) -> Result<CurrentUserResponse, AuthError> {
        let registry = self.registry();

        registry
            .sessions
            .get(token)
            .and_then(|email| registry.accounts.get(email))
            .map(|account| CurrentUserResponse {
                user: account.user.clone(),
            })
            .ok_or_else(|| {
                AuthError::rejected(401, "Session expired, please log in again")
            })
    }
}

/// Generates a random 32-character hex string (128 bits of entropy).
fn generate_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 16] = rng.random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
