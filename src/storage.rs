use log::debug;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Key/value text storage scoped to one user session
///
/// Mirrors the browser storage interface: values are opaque text and every
/// `set` replaces the previous value for the key as a whole.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> io::Result<()>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> io::Result<()>;
}

/// In-process storage that lives as long as the value does
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}

/// Storage backed by one JSON file per key inside a session directory
///
/// Used by the command-line front end so that a search and a later `show`
/// in a separate process see the same results.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (and create if needed) the session directory
    pub fn open(dir: impl AsRef<Path>) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", file_name))
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    debug!("Failed to read {}: {}", path.display(), e);
                }
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let path = self.path_for(key);
        // Write then rename so readers never observe a partial value
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k"), None);
        storage.set("k", "one").unwrap();
        storage.set("k", "two").unwrap();
        assert_eq!(storage.get("k").as_deref(), Some("two"));
        storage.remove("k").unwrap();
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k"), None);
    }

    #[test]
    fn test_file_storage_persists_between_handles() {
        let dir = tempfile::tempdir().unwrap();
        let first = FileStorage::open(dir.path()).unwrap();
        first.set("recipeSearchResults", "[1,2,3]").unwrap();

        let second = FileStorage::open(dir.path()).unwrap();
        assert_eq!(second.get("recipeSearchResults").as_deref(), Some("[1,2,3]"));

        second.remove("recipeSearchResults").unwrap();
        assert_eq!(first.get("recipeSearchResults"), None);
        second.remove("recipeSearchResults").unwrap();
    }

    #[test]
    fn test_file_storage_sanitizes_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        storage.set("../escape", "x").unwrap();
        assert!(dir.path().join("___escape.json").exists());
        assert!(!dir.path().join("../escape.json").exists());
        assert_eq!(storage.get("../escape").as_deref(), Some("x"));
    }
}
