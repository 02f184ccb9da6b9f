//! Error types for the i18n layer.
//!
//! Only catalog *loading* can fail. Resolving text never does.

use std::path::PathBuf;

/// Errors that can occur while loading a [`TranslationCatalog`](crate::TranslationCatalog).
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    /// The catalog file couldn't be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog isn't a JSON object of language → nested string tables.
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
