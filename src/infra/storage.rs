//! Persisted client storage.
//!
//! One JSON object on disk whose members are themselves JSON-encoded strings,
//! one per persisted slice. Only the `auth` member is read or written here;
//! other members are carried through untouched.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::UserAccount;

const AUTH_KEY: &str = "auth";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage blob is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// The persisted part of the auth slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedAuth {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserAccount>,
}

pub struct PersistedStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl PersistedStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Token for the `Authorization` header. Read from disk on every call;
    /// unreadable storage means "no token" and is only logged.
    pub fn read_token(&self) -> Option<String> {
        match self.load_auth() {
            Ok(auth) => auth
                .and_then(|a| a.token)
                .filter(|t| !t.trim().is_empty()),
            Err(err) => {
                log::warn!("Error reading token from storage: {err}");
                None
            }
        }
    }

    pub fn load_auth(&self) -> Result<Option<PersistedAuth>, StorageError> {
        let root = self.read_root()?;
        match root.get(AUTH_KEY) {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    pub fn save_auth(&self, auth: &PersistedAuth) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock();
        let mut root = self.read_root()?;
        root.insert(AUTH_KEY.to_string(), serde_json::to_string(auth)?);
        self.write_root(&root)
    }

    pub fn clear_auth(&self) -> Result<(), StorageError> {
        self.save_auth(&PersistedAuth::default())
    }

    fn read_root(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(source) => Err(StorageError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write_root(&self, root: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = serde_json::to_string(root)?;
        std::fs::write(&self.path, contents).map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_has_no_token() {
        let dir = tempdir().unwrap();
        let storage = PersistedStorage::new(dir.path().join("storage.json"));
        assert_eq!(storage.read_token(), None);
        assert!(storage.load_auth().unwrap().is_none());
    }

    #[test]
    fn token_round_trips_and_foreign_members_survive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, r#"{"_persist":"{\"version\":-1}"}"#).unwrap();
        let storage = PersistedStorage::new(&path);

        storage
            .save_auth(&PersistedAuth {
                token: Some("abc".into()),
                user: None,
            })
            .unwrap();
        assert_eq!(storage.read_token().as_deref(), Some("abc"));

        let raw: BTreeMap<String, String> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(raw.contains_key("_persist"));

        storage.clear_auth().unwrap();
        assert_eq!(storage.read_token(), None);
    }

    #[test]
    fn corrupt_blob_reads_as_no_token() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, r#"{"auth":"not json"}"#).unwrap();
        let storage = PersistedStorage::new(&path);
        assert_eq!(storage.read_token(), None);
        assert!(storage.load_auth().is_err());
    }
}
