//! The text resolver: active language + key-path lookup.

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{TranslationCatalog, interpolate};

// ---------------------------------------------------------------------------
// I18nConfig
// ---------------------------------------------------------------------------

/// Language settings for a [`TextResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Language used whenever the active one has no text for a key.
    ///
    /// Default: `"en"`.
    pub baseline_language: String,

    /// Language selected at startup. `None` means the baseline.
    pub initial_language: Option<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            baseline_language: "en".to_owned(),
            initial_language: None,
        }
    }
}

// ---------------------------------------------------------------------------
// TextResolver
// ---------------------------------------------------------------------------

/// Resolves dotted key paths to display text in the active language.
///
/// The catalog is shared (`Arc`), so cloning a resolver is cheap and the
/// clone keeps its own language selection.
#[derive(Debug, Clone)]
pub struct TextResolver {
    catalog: Arc<TranslationCatalog>,
    baseline: String,
    language: String,
}

impl TextResolver {
    /// Creates a resolver over `catalog`, starting in the configured
    /// initial language (or the baseline).
    pub fn new(catalog: Arc<TranslationCatalog>, config: &I18nConfig) -> Self {
        let language = config
            .initial_language
            .clone()
            .unwrap_or_else(|| config.baseline_language.clone());

        if !catalog.has_language(&config.baseline_language) {
            tracing::warn!(
                baseline = %config.baseline_language,
                "baseline language has no table, misses will show raw keys"
            );
        }

        Self {
            catalog,
            baseline: config.baseline_language.clone(),
            language,
        }
    }

    /// The active language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The fallback language code.
    pub fn baseline_language(&self) -> &str {
        &self.baseline
    }

    /// Switches the active language.
    ///
    /// Any code is accepted. A code with no table just resolves through
    /// the baseline.
    pub fn set_language(&mut self, code: impl Into<String>) {
        self.language = code.into();
        tracing::debug!(language = %self.language, "language changed");
    }

    /// The catalog this resolver reads from.
    pub fn catalog(&self) -> &TranslationCatalog {
        &self.catalog
    }

    /// Resolves `key_path` in the active language.
    ///
    /// Falls back to the baseline language, then to `key_path` itself.
    pub fn resolve(&self, key_path: &str) -> String {
        self.lookup(key_path)
            .unwrap_or(key_path)
            .to_owned()
    }

    /// Resolves `key_path`, then substitutes `{{name}}` placeholders.
    ///
    /// Values are converted with `Display`, so numbers work directly:
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use hearth_i18n::{I18nConfig, TextResolver, TranslationCatalog};
    ///
    /// let catalog = TranslationCatalog::new()
    ///     .with_text("en", "inbox.unread", "{{count}} unread");
    /// let text = TextResolver::new(Arc::new(catalog), &I18nConfig::default());
    ///
    /// assert_eq!(text.resolve_with("inbox.unread", [("count", 3)]), "3 unread");
    /// ```
    pub fn resolve_with<I, K, V>(&self, key_path: &str, replacements: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display,
    {
        let values: HashMap<String, String> = replacements
            .into_iter()
            .map(|(key, value)| (key.as_ref().to_owned(), value.to_string()))
            .collect();

        let base = self.lookup(key_path).unwrap_or(key_path);
        interpolate(base, &values)
    }

    /// current language → baseline → `None`.
    fn lookup(&self, key_path: &str) -> Option<&str> {
        let found = self
            .catalog
            .lookup(&self.language, key_path)
            .or_else(|| self.catalog.lookup(&self.baseline, key_path));

        if found.is_none() {
            tracing::trace!(
                key = key_path,
                language = %self.language,
                "no translation, showing key"
            );
        }
        found
    }
}
