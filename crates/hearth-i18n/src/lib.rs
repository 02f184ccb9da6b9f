//! Localized text lookup for Hearth.
//!
//! Provides a language-keyed [`TranslationCatalog`] of nested text tables,
//! dotted key-path lookup with a baseline-language fallback, and
//! `{{name}}` placeholder interpolation.
//!
//! # Key types
//!
//! - [`TranslationCatalog`]: static text data, built in code or loaded
//!   from JSON
//! - [`TextResolver`]: the active language plus `resolve()`
//! - [`I18nConfig`]: baseline and initial language
//!
//! # Fallback chain
//!
//! ```text
//! current language table ──(miss)──→ baseline table ──(miss)──→ key path
//! ```
//!
//! Resolution never fails: a missing language or key shows up in the UI
//! as the raw key path, which is easy to spot and never blank.

mod catalog;
mod error;
mod interpolate;
mod resolver;

pub use catalog::{Table, TextNode, TranslationCatalog};
pub use error::I18nError;
pub use interpolate::interpolate;
pub use resolver::{I18nConfig, TextResolver};
