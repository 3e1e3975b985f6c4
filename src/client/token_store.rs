//! Persistence for the single opaque auth token.
//!
//! The browser frontend kept this in localStorage under one key; here it is
//! either a file on disk or process memory (tests, short-lived tools).

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::error::Error;

#[derive(Debug)]
enum Backing {
    Memory(Mutex<Option<String>>),
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct TokenStore {
    backing: Arc<Backing>,
}

impl TokenStore {
    pub fn in_memory() -> Self {
        Self {
            backing: Arc::new(Backing::Memory(Mutex::new(None))),
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            backing: Arc::new(Backing::File(path.into())),
        }
    }

    /// Missing, unreadable or empty storage all read as "no token".
    pub fn load(&self) -> Option<String> {
        match &*self.backing {
            Backing::Memory(slot) => slot.lock().ok()?.clone(),
            Backing::File(path) => {
                let raw = std::fs::read_to_string(path).ok()?;
                let token = raw.trim();
                (!token.is_empty()).then(|| token.to_string())
            }
        }
    }

    pub fn save(&self, token: &str) -> Result<(), Error> {
        match &*self.backing {
            Backing::Memory(slot) => {
                let mut guard = slot
                    .lock()
                    .map_err(|_| Error::TokenStore("token store poisoned".to_string()))?;
                *guard = Some(token.to_string());
                Ok(())
            }
            Backing::File(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)
                        .map_err(|e| Error::TokenStore(e.to_string()))?;
                }
                std::fs::write(path, token).map_err(|e| Error::TokenStore(e.to_string()))
            }
        }
    }

    /// Idempotent: clearing an already-empty store succeeds.
    pub fn clear(&self) -> Result<(), Error> {
        match &*self.backing {
            Backing::Memory(slot) => {
                let mut guard = slot
                    .lock()
                    .map_err(|_| Error::TokenStore("token store poisoned".to_string()))?;
                *guard = None;
                Ok(())
            }
            Backing::File(path) => match std::fs::remove_file(path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(Error::TokenStore(e.to_string())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let store = TokenStore::in_memory();
        assert_eq!(store.load(), None);
        store.save("abc").unwrap();
        assert_eq!(store.load().as_deref(), Some("abc"));
        store.clear().unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        let store = TokenStore::file(&path);

        assert_eq!(store.load(), None);
        store.save("jwt-value").unwrap();
        assert_eq!(store.load().as_deref(), Some("jwt-value"));

        // A second handle over the same path sees the persisted token.
        let other = TokenStore::file(&path);
        assert_eq!(other.load().as_deref(), Some("jwt-value"));

        store.clear().unwrap();
        assert_eq!(store.load(), None);
        store.clear().unwrap();
    }

    #[test]
    fn whitespace_only_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "  \n").unwrap();
        assert_eq!(TokenStore::file(&path).load(), None);
    }
}
