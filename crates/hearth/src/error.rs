//! Unified error type for Hearth.

use std::path::PathBuf;

use hearth_i18n::I18nError;
use hearth_transport::TransportError;

/// Top-level error that wraps the crate errors setup can produce.
///
/// Only setup can fail: loading config, loading catalogs, building a
/// transport. Once an [`AppContext`](crate::AppContext) exists, login and
/// signup report through `AuthResult` and lookups never fail.
#[derive(Debug, thiserror::Error)]
pub enum HearthError {
    /// A translation catalog couldn't be read or parsed.
    #[error(transparent)]
    I18n(#[from] I18nError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The config document isn't valid JSON for [`HearthConfig`](crate::HearthConfig).
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
