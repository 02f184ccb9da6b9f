//! # Hearth
//!
//! Client-side application state providers: who is logged in, and which
//! language the UI speaks.
//!
//! Hearth bundles a [`SessionManager`](hearth_session::SessionManager)
//! (restore, login, signup, logout against a pluggable auth backend) and a
//! [`TextResolver`](hearth_i18n::TextResolver) (dotted key lookup with a
//! baseline-language fallback) into one [`AppContext`] that is passed down
//! the UI tree explicitly.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hearth::prelude::*;
//!
//! # async fn run() -> Result<(), HearthError> {
//! hearth::telemetry::init_tracing("info");
//!
//! let config = HearthConfig::load("hearth.json")?;
//! let catalog = TranslationCatalog::load("translations.json")?;
//! let ctx = AppContextBuilder::new()
//!     .config(config)
//!     .catalog(catalog)
//!     .build_http(MemoryTokenStore::new())?;
//!
//! ctx.restore_session().await;
//! if !ctx.snapshot().is_authenticated {
//!     let outcome = ctx.login("sam@example.com", "hunter2").await;
//!     println!("{}", outcome.message().unwrap_or("welcome"));
//! }
//! println!("{}", ctx.resolve("home.title"));
//! # Ok(())
//! # }
//! ```

mod config;
mod context;
mod error;
pub mod telemetry;

pub use config::HearthConfig;
pub use context::{AppContext, AppContextBuilder};
pub use error::HearthError;

pub use hearth_i18n as i18n;
pub use hearth_protocol as protocol;
pub use hearth_session as session;
pub use hearth_transport as transport;

/// Everything an application usually needs, in one import.
pub mod prelude {
    pub use crate::{AppContext, AppContextBuilder, HearthConfig, HearthError};

    pub use hearth_i18n::{I18nConfig, TextResolver, TranslationCatalog};
    pub use hearth_protocol::{User, UserId};
    pub use hearth_session::{
        AuthClient, AuthError, AuthResult, FileTokenStore, MemoryTokenStore,
        SessionConfig, SessionSnapshot, TokenStore,
    };
    pub use hearth_transport::{
        HttpAuthClient, HttpClientConfig, LocalAuthClient,
    };
}
