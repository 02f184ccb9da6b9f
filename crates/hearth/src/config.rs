//! Application-level configuration.

use std::path::Path;

use hearth_i18n::I18nConfig;
use hearth_session::SessionConfig;
use hearth_transport::HttpClientConfig;
use serde::{Deserialize, Serialize};

use crate::HearthError;

/// Everything needed to build an [`AppContext`](crate::AppContext).
///
/// Every section defaults, so `{}` is a valid config document and a
/// file only needs the values it changes:
///
/// ```json
/// {
///   "session": { "token_key": "auth_token" },
///   "i18n": { "baseline_language": "en", "initial_language": "es" },
///   "http": { "base_url": "https://api.example.com" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HearthConfig {
    pub session: SessionConfig,
    pub i18n: I18nConfig,
    pub http: HttpClientConfig,
}

impl HearthConfig {
    /// Parses a JSON config document.
    ///
    /// # Errors
    /// [`HearthError::Config`] if the document isn't valid JSON or a
    /// field has the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, HearthError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    ///
    /// # Errors
    /// [`HearthError::Io`] if the file can't be read, otherwise as
    /// [`from_json_str`](Self::from_json_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HearthError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| {
            HearthError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}
