//! Persistent storage for the session token.
//!
//! A [`TokenStore`] is passive: it holds strings under keys and never
//! validates them. The [`SessionManager`](crate::SessionManager) is the
//! only writer.
//!
//! Two implementations are provided:
//! - [`MemoryTokenStore`]: lives as long as the process; clones share
//!   the same map, which is handy for simulating an app reload in tests.
//! - [`FileTokenStore`]: a small JSON document on disk, rewritten on
//!   every change, so a session survives restarts.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use hearth_protocol::{Codec, JsonCodec};

/// Synchronous key-value storage for the session token.
///
/// Methods take `&self` (storage uses interior mutability) and never
/// fail from the caller's point of view: an implementation that can hit
/// I/O errors logs them and carries on.
pub trait TokenStore: Send + Sync + 'static {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Deletes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str);
}

/// Recovers the map even if another thread panicked while holding it.
/// The map is never left half-updated, so the data is still valid.
fn lock(entries: &Mutex<HashMap<String, String>>) -> MutexGuard<'_, HashMap<String, String>> {
    entries.lock().unwrap_or_else(PoisonError::into_inner)
}

// ---------------------------------------------------------------------------
// MemoryTokenStore
// ---------------------------------------------------------------------------

/// An in-process [`TokenStore`].
///
/// `Clone` is shallow: every clone sees the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        lock(&self.entries).is_empty()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.entries).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        lock(&self.entries).insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        lock(&self.entries).remove(key);
    }
}

// ---------------------------------------------------------------------------
// FileTokenStore
// ---------------------------------------------------------------------------

/// A [`TokenStore`] backed by a JSON file (`{"token": "..."}`).
///
/// The whole document is cached in memory and rewritten after each
/// `set`/`remove`. Reads never touch the disk after [`open`](Self::open).
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileTokenStore {
    /// Opens (or prepares to create) the store at `path`.
    ///
    /// A missing file is an empty store. A file that exists but isn't a
    /// JSON object of strings is treated as empty and overwritten on the
    /// next change; a corrupt token file must not lock the user out.
    ///
    /// # Errors
    /// Returns the I/O error if the file exists but can't be read.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();

        let entries = match std::fs::read(&path) {
            Ok(bytes) => match JsonCodec.decode::<HashMap<String, String>>(&bytes) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "token file is unreadable, starting empty"
                    );
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e),
        };

        tracing::debug!(path = %path.display(), keys = entries.len(), "token store opened");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// The file this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the current map to disk. Failures are logged, not returned.
    fn persist(&self, entries: &HashMap<String, String>) {
        let bytes = match JsonCodec.encode(entries) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(error = %e, "failed to encode token file");
                return;
            }
        };

        if let Some(parent) = self.path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            tracing::warn!(
                path = %parent.display(),
                error = %e,
                "failed to create token directory"
            );
            return;
        }

        if let Err(e) = std::fs::write(&self.path, bytes) {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "failed to write token file"
            );
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.entries).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = lock(&self.entries);
        entries.insert(key.to_owned(), value.to_owned());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = lock(&self.entries);
        if entries.remove(key).is_some() {
            self.persist(&entries);
        }
    }
}
