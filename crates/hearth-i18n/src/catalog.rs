//! Translation data: language code → nested tables of text.
//!
//! A catalog is plain data known at build time. In JSON it looks like:
//!
//! ```json
//! {
//!   "en": { "auth": { "login": { "title": "Sign in" } } },
//!   "fr": { "auth": { "login": { "title": "Connexion" } } }
//! }
//! ```
//!
//! and `auth.login.title` addresses the leaf strings.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::I18nError;

/// One level of a language's text tree.
pub type Table = BTreeMap<String, TextNode>;

/// A node in a language's text tree: either a leaf string or a nested
/// table.
///
/// `#[serde(untagged)]` maps a JSON string to `Text` and a JSON object to
/// `Table`; anything else (numbers, arrays) is a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextNode {
    Text(String),
    Table(Table),
}

/// Language-keyed text tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationCatalog {
    languages: HashMap<String, Table>,
}

impl TranslationCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a catalog from a JSON string.
    ///
    /// # Errors
    /// Returns [`I18nError::Parse`] if the document isn't an object of
    /// language codes to nested string tables.
    pub fn from_json_str(json: &str) -> Result<Self, I18nError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a catalog from JSON bytes (e.g. `include_bytes!`).
    ///
    /// # Errors
    /// Same as [`from_json_str`](Self::from_json_str).
    pub fn from_json_slice(json: &[u8]) -> Result<Self, I18nError> {
        Ok(serde_json::from_slice(json)?)
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    /// [`I18nError::Io`] if the file can't be read, [`I18nError::Parse`]
    /// if it isn't a valid catalog.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, I18nError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| I18nError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_slice(&bytes)?;
        tracing::debug!(
            path = %path.display(),
            languages = catalog.languages.len(),
            "translation catalog loaded"
        );
        Ok(catalog)
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_text(
        mut self,
        language: &str,
        key_path: &str,
        text: impl Into<String>,
    ) -> Self {
        self.insert(language, key_path, text);
        self
    }

    /// Stores `text` at `key_path` in `language`'s table, creating
    /// intermediate tables as needed.
    ///
    /// A leaf string sitting where a table is needed is replaced by the
    /// table, so the last insert wins.
    pub fn insert(
        &mut self,
        language: &str,
        key_path: &str,
        text: impl Into<String>,
    ) {
        let (parents, leaf) = match key_path.rsplit_once('.') {
            Some((parents, leaf)) => (Some(parents), leaf),
            None => (None, key_path),
        };

        let mut table = self.languages.entry(language.to_owned()).or_default();
        for segment in parents.into_iter().flat_map(|p| p.split('.')) {
            let node = table
                .entry(segment.to_owned())
                .or_insert_with(|| TextNode::Table(Table::new()));
            if let TextNode::Text(_) = node {
                *node = TextNode::Table(Table::new());
            }
            table = match node {
                TextNode::Table(next) => next,
                TextNode::Text(_) => return,
            };
        }
        table.insert(leaf.to_owned(), TextNode::Text(text.into()));
    }

    /// Returns `true` if the catalog has a table for `language`.
    pub fn has_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// The language codes in this catalog, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> =
            self.languages.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Walks `key_path` through `language`'s table.
    ///
    /// Returns `None` when the language is missing, a segment is missing,
    /// the walk ends on a table instead of a string, or the string is
    /// empty. A miss is ordinary control flow here, not an error.
    pub fn lookup(&self, language: &str, key_path: &str) -> Option<&str> {
        let mut segments = key_path.split('.');
        let root = self.languages.get(language)?;
        let mut node = root.get(segments.next()?)?;

        for segment in segments {
            node = match node {
                TextNode::Table(table) => table.get(segment)?,
                TextNode::Text(_) => return None,
            };
        }

        match node {
            TextNode::Text(text) if !text.is_empty() => Some(text.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "en": {
            "common": { "ok": "OK", "empty": "" },
            "auth": { "login": { "title": "Sign in" } }
        },
        "es": { "common": { "ok": "Vale" } }
    }"#;

    #[test]
    fn test_from_json_str_parses_nested_tables() {
        let catalog = TranslationCatalog::from_json_str(SAMPLE).unwrap();

        assert_eq!(catalog.lookup("en", "auth.login.title"), Some("Sign in"));
        assert_eq!(catalog.lookup("es", "common.ok"), Some("Vale"));
    }

    #[test]
    fn test_from_json_str_rejects_numbers() {
        let result = TranslationCatalog::from_json_str(r#"{"en":{"count":3}}"#);

        assert!(matches!(result, Err(I18nError::Parse(_))));
    }

    #[test]
    fn test_from_json_str_rejects_string_language_root() {
        // A language must map to a table, not directly to a string.
        let result = TranslationCatalog::from_json_str(r#"{"en":"hello"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_returns_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = TranslationCatalog::load(dir.path().join("nope.json"));

        assert!(matches!(result, Err(I18nError::Io { .. })));
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let catalog = TranslationCatalog::load(&path).unwrap();

        assert_eq!(catalog.languages(), vec!["en", "es"]);
    }

    #[test]
    fn test_lookup_missing_segment_returns_none() {
        let catalog = TranslationCatalog::from_json_str(SAMPLE).unwrap();

        assert_eq!(catalog.lookup("en", "auth.signup.title"), None);
    }

    #[test]
    fn test_lookup_through_leaf_returns_none() {
        // "common.ok" is a string, so it has no children.
        let catalog = TranslationCatalog::from_json_str(SAMPLE).unwrap();

        assert_eq!(catalog.lookup("en", "common.ok.extra"), None);
    }

    #[test]
    fn test_lookup_ending_on_table_returns_none() {
        let catalog = TranslationCatalog::from_json_str(SAMPLE).unwrap();

        assert_eq!(catalog.lookup("en", "auth.login"), None);
    }

    #[test]
    fn test_lookup_empty_string_returns_none() {
        let catalog = TranslationCatalog::from_json_str(SAMPLE).unwrap();

        assert_eq!(catalog.lookup("en", "common.empty"), None);
    }

    #[test]
    fn test_lookup_unknown_language_returns_none() {
        let catalog = TranslationCatalog::from_json_str(SAMPLE).unwrap();

        assert_eq!(catalog.lookup("de", "common.ok"), None);
        assert!(!catalog.has_language("de"));
    }

    #[test]
    fn test_insert_builds_intermediate_tables() {
        let catalog = TranslationCatalog::new()
            .with_text("en", "a.b.c", "deep")
            .with_text("en", "a.b.d", "sibling")
            .with_text("en", "top", "shallow");

        assert_eq!(catalog.lookup("en", "a.b.c"), Some("deep"));
        assert_eq!(catalog.lookup("en", "a.b.d"), Some("sibling"));
        assert_eq!(catalog.lookup("en", "top"), Some("shallow"));
    }

    #[test]
    fn test_insert_replaces_leaf_with_table() {
        let catalog = TranslationCatalog::new()
            .with_text("en", "menu", "Menu")
            .with_text("en", "menu.open", "Open");

        assert_eq!(catalog.lookup("en", "menu"), None);
        assert_eq!(catalog.lookup("en", "menu.open"), Some("Open"));
    }

    #[test]
    fn test_serialize_matches_json_shape() {
        let catalog = TranslationCatalog::new().with_text("en", "a.b", "x");

        let json = serde_json::to_string(&catalog).unwrap();

        assert_eq!(json, r#"{"en":{"a":{"b":"x"}}}"#);
    }
}
