//! `AppContext` builder and shared application state.
//!
//! This is what a UI tree receives instead of reaching for globals. It
//! ties together both providers: session (auth) and text (i18n).

use std::sync::{Arc, PoisonError, RwLock};

use hearth_i18n::{TextResolver, TranslationCatalog};
use hearth_session::{
    AuthClient, AuthResult, SessionManager, SessionSnapshot, TokenStore,
};
use hearth_transport::HttpAuthClient;
use tokio::sync::{Mutex, MutexGuard, watch};

use crate::{HearthConfig, HearthError};

/// Builder for an [`AppContext`].
///
/// # Example
///
/// ```rust
/// use hearth::prelude::*;
///
/// # async fn demo() {
/// let catalog = TranslationCatalog::new().with_text("en", "home.title", "Home");
/// let ctx = AppContextBuilder::new()
///     .catalog(catalog)
///     .build(LocalAuthClient::new(), MemoryTokenStore::new());
///
/// ctx.restore_session().await;
/// assert_eq!(ctx.resolve("home.title"), "Home");
/// # }
/// ```
#[derive(Debug, Default)]
pub struct AppContextBuilder {
    config: HearthConfig,
    catalog: Arc<TranslationCatalog>,
}

impl AppContextBuilder {
    /// Creates a builder with default config and an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: HearthConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the translation catalog.
    pub fn catalog(mut self, catalog: impl Into<Arc<TranslationCatalog>>) -> Self {
        self.catalog = catalog.into();
        self
    }

    /// Builds the context around the given backend and token store.
    ///
    /// The session starts in the loading state; call
    /// [`AppContext::restore_session`] once at startup.
    pub fn build<A: AuthClient, S: TokenStore>(
        self,
        client: A,
        store: S,
    ) -> AppContext<A, S> {
        let manager = SessionManager::new(client, store, self.config.session);
        let updates = manager.subscribe();
        let text = TextResolver::new(self.catalog, &self.config.i18n);

        tracing::debug!(language = text.language(), "app context built");

        AppContext {
            session: Mutex::new(manager),
            updates,
            text: RwLock::new(text),
        }
    }

    /// Builds the context with an [`HttpAuthClient`] made from the
    /// configured `http` section.
    ///
    /// # Errors
    /// [`HearthError::Transport`] if the HTTP client can't be built.
    pub fn build_http<S: TokenStore>(
        self,
        store: S,
    ) -> Result<AppContext<HttpAuthClient, S>, HearthError> {
        let client = HttpAuthClient::new(self.config.http.clone())?;
        Ok(self.build(client, store))
    }
}

/// Session and text providers, shared by the whole UI.
///
/// Wrap it in an `Arc` to hand it to several tasks. The session manager
/// sits behind an async `Mutex`, so concurrent `login`/`signup` calls run
/// one after another instead of racing. Text lookups go through a
/// separate lock and never wait on a login in flight.
pub struct AppContext<A: AuthClient, S: TokenStore> {
    session: Mutex<SessionManager<A, S>>,
    updates: watch::Receiver<SessionSnapshot>,
    text: RwLock<TextResolver>,
}

impl<A: AuthClient, S: TokenStore> AppContext<A, S> {
    // -- session -----------------------------------------------------------

    /// Locks the session manager for direct access.
    ///
    /// Waits while a login/signup/restore is in flight.
    pub async fn session(&self) -> MutexGuard<'_, SessionManager<A, S>> {
        self.session.lock().await
    }

    /// See [`SessionManager::restore_session`].
    pub async fn restore_session(&self) {
        self.session.lock().await.restore_session().await;
    }

    /// See [`SessionManager::login`].
    pub async fn login(&self, email: &str, password: &str) -> AuthResult {
        self.session.lock().await.login(email, password).await
    }

    /// See [`SessionManager::signup`].
    pub async fn signup(
        &self,
        name: &str,
        mobile: &str,
        email: &str,
        password: &str,
    ) -> AuthResult {
        self.session
            .lock()
            .await
            .signup(name, mobile, email, password)
            .await
    }

    /// See [`SessionManager::logout`].
    pub async fn logout(&self) {
        self.session.lock().await.logout();
    }

    /// The latest published session state.
    ///
    /// Doesn't take the session lock, so it answers immediately even
    /// while a login is in flight (`is_loading`/`user` reflect the state
    /// before that call).
    pub fn snapshot(&self) -> SessionSnapshot {
        self.updates.borrow().clone()
    }

    /// A receiver that is notified after every session change.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.updates.clone()
    }

    // -- text --------------------------------------------------------------

    /// See [`TextResolver::resolve`].
    pub fn resolve(&self, key_path: &str) -> String {
        self.text().resolve(key_path)
    }

    /// See [`TextResolver::resolve_with`].
    pub fn resolve_with<I, K, V>(&self, key_path: &str, replacements: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: std::fmt::Display,
    {
        self.text().resolve_with(key_path, replacements)
    }

    /// See [`TextResolver::set_language`].
    pub fn set_language(&self, code: impl Into<String>) {
        self.text
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_language(code);
    }

    /// The active language code.
    pub fn language(&self) -> String {
        self.text().language().to_owned()
    }

    /// A copy of the resolver, for code that wants to resolve many keys
    /// without touching the lock each time.
    pub fn text_resolver(&self) -> TextResolver {
        self.text().clone()
    }

    fn text(&self) -> std::sync::RwLockReadGuard<'_, TextResolver> {
        self.text.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use hearth_session::MemoryTokenStore;
    use hearth_transport::LocalAuthClient;

    use super::*;

    fn catalog() -> TranslationCatalog {
        TranslationCatalog::new()
            .with_text("en", "auth.login", "Log in")
            .with_text("en", "greeting", "Hello {{name}}")
            .with_text("es", "auth.login", "Iniciar sesión")
    }

    fn context() -> AppContext<LocalAuthClient, MemoryTokenStore> {
        AppContextBuilder::new().catalog(catalog()).build(
            LocalAuthClient::new().with_account("Sam", "555", "sam@example.com", "pw"),
            MemoryTokenStore::new(),
        )
    }

    #[tokio::test]
    async fn test_build_starts_loading() {
        let ctx = context();

        assert!(ctx.snapshot().is_loading);
        assert!(!ctx.snapshot().is_authenticated);
    }

    #[tokio::test]
    async fn test_restore_session_clears_loading() {
        let ctx = context();

        ctx.restore_session().await;

        assert!(!ctx.snapshot().is_loading);
    }

    #[tokio::test]
    async fn test_login_updates_snapshot() {
        let ctx = context();
        ctx.restore_session().await;

        let result = ctx.login("sam@example.com", "pw").await;

        assert!(result.is_success());
        assert!(ctx.snapshot().is_authenticated);
        assert_eq!(ctx.session().await.user().map(|u| u.name.as_str()), Some("Sam"));
    }

    #[tokio::test]
    async fn test_logout_updates_snapshot() {
        let ctx = context();
        ctx.restore_session().await;
        let _ = ctx.login("sam@example.com", "pw").await;

        ctx.logout().await;

        assert!(!ctx.snapshot().is_authenticated);
        assert!(ctx.snapshot().user.is_none());
    }

    #[test]
    fn test_set_language_changes_resolution() {
        let ctx = context();

        ctx.set_language("es");

        assert_eq!(ctx.language(), "es");
        assert_eq!(ctx.resolve("auth.login"), "Iniciar sesión");
        assert_eq!(ctx.resolve_with("greeting", [("name", "Sam")]), "Hello Sam");
    }

    #[test]
    fn test_initial_language_from_config() {
        let mut config = HearthConfig::default();
        config.i18n.initial_language = Some("es".into());

        let ctx = AppContextBuilder::new()
            .config(config)
            .catalog(catalog())
            .build(LocalAuthClient::new(), MemoryTokenStore::new());

        assert_eq!(ctx.resolve("auth.login"), "Iniciar sesión");
    }

    #[test]
    fn test_text_resolver_copy_is_independent() {
        let ctx = context();
        let mut copy = ctx.text_resolver();

        copy.set_language("es");

        assert_eq!(ctx.language(), "en");
    }

    #[test]
    fn test_build_http_rejects_bad_base_url() {
        let mut config = HearthConfig::default();
        config.http.base_url = "localhost:8080".into();

        let result = AppContextBuilder::new()
            .config(config)
            .build_http(MemoryTokenStore::new());

        assert!(matches!(result, Err(HearthError::Transport(_))));
    }
}
