use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::errors::StoreError;

/// Durable storage capability for the single current session token.
///
/// Mirrors a browser's local storage: one slot, read on every authenticated
/// request, overwritten on login, cleared on logout. Reads tolerate absence
/// (first run, logged out); concurrent writers get last-write-wins.
pub trait TokenStore: Send + Sync {
    /// Read the current token, if any.
    fn get(&self) -> Option<String>;

    /// Store a token, replacing any previous one.
    fn set(&self, token: &str) -> Result<(), StoreError>;

    /// Remove the stored token; clearing an empty store is not an error.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Volatile token store for tests and short-lived processes.
pub struct InMemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self {
            token: Mutex::new(None),
        }
    }
}

impl Default for InMemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for InMemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().expect("token lock poisoned").clone()
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        *self.token.lock().expect("token lock poisoned") = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.token.lock().expect("token lock poisoned") = None;
        Ok(())
    }
}

/// File-backed token store, persisting the session across process restarts.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                }
            }
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    tracing::warn!(path = %self.path.display(), error = %e, "Failed to read token file");
                }
                None
            }
        }
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
