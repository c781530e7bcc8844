//! Directory-backed store used by the command-line front end.
//!
//! Each key is one `<key>.json` file. Writes land in a temporary sibling first
//! and are renamed over the target, so a reader never sees a half-written
//! record.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, RepositoryError};

/// A store that keeps one file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        tracing::debug!(path = %root.display(), "Opened file store");
        Ok(Self { root })
    }

    /// The directory holding the records.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, RepositoryError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

/// Keys become file names, so they are limited to a safe alphabet.
fn validate_key(key: &str) -> Result<(), RepositoryError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(RepositoryError::InvalidKey(key.to_owned()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let path = self.path_for(key)?;
        let tmp = self.root.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
