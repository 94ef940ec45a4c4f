// tiffin-client/src/store.rs
// Local key-value persistence - one JSON document per file

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON file store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store at `base_path/filename`
    pub fn new(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        let path = base_path.into().join(filename);
        Self { path }
    }

    /// Ensure the parent directory exists
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Save a value, replacing the previous one
    pub fn save<T: Serialize>(&self, value: &T) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&self.path, json)
    }

    /// Load the value; missing or unreadable files yield `None`
    pub fn load<T: DeserializeOwned>(&self) -> Option<T> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable store file");
                None
            }
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Delete the file if present
    pub fn delete(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Settings {
        theme: String,
    }

    #[test]
    fn test_save_load_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested"), "settings.json");
        assert!(!store.exists());
        assert!(store.load::<Settings>().is_none());

        store.save(&Settings { theme: "dark".into() }).unwrap();
        assert!(store.exists());
        assert_eq!(
            store.load::<Settings>(),
            Some(Settings { theme: "dark".into() })
        );

        store.delete().unwrap();
        assert!(!store.exists());
        store.delete().unwrap();
    }

    #[test]
    fn test_corrupt_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path(), "settings.json");
        std::fs::write(store.path(), "{not json").unwrap();
        assert!(store.load::<Settings>().is_none());
    }
}
