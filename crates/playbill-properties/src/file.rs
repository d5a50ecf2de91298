//! JSON-file-backed property store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::PropertyError;
use crate::memory::MemoryPropertyStore;
use crate::store::PropertyStore;
use crate::value::PropertyValue;
use crate::Result;

/// A property store persisted to a JSON file.
///
/// The file is read once at open; every mutation writes the full contents
/// back to disk. A missing file opens as an empty store, a corrupt file is
/// an open error. Persistence failures on mutation are logged and the
/// in-memory contents stay authoritative, so store operations remain total.
#[derive(Debug)]
pub struct FilePropertyStore {
    path: PathBuf,
    inner: MemoryPropertyStore,
}

impl FilePropertyStore {
    /// Opens the store backed by `path`, loading existing contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str::<HashMap<String, PropertyValue>>(&content)
                .map_err(|e| PropertyError::Corrupt {
                    path: path.clone(),
                    reason: e.to_string(),
                })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(PropertyError::Io(e)),
        };

        debug!(path = %path.display(), entries = entries.len(), "property store opened");
        Ok(Self {
            path,
            inner: MemoryPropertyStore::with_entries(entries),
        })
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the current contents to the backing file.
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.inner.snapshot())?;
        std::fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), "property store saved");
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            warn!(path = %self.path.display(), error = %e, "failed to persist property store");
        }
    }
}

impl PropertyStore for FilePropertyStore {
    fn get(&self, key: &str) -> Option<PropertyValue> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: PropertyValue) {
        self.inner.set(key, value);
        self.persist();
    }

    fn has_property(&self, key: &str) -> bool {
        self.inner.has_property(key)
    }

    fn remove_property(&self, key: &str) -> bool {
        let removed = self.inner.remove_property(key);
        if removed {
            self.persist();
        }
        removed
    }

    fn keys(&self) -> Vec<String> {
        self.inner.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = FilePropertyStore::open(temp.path().join("props.json")).unwrap();
        assert!(store.keys().is_empty());
    }

    #[test]
    fn test_mutations_survive_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("props.json");

        let store = FilePropertyStore::open(&path).unwrap();
        store.set_string("app.deploytype", "production");
        store.set_bool("app.analytics", true);
        store.set_list("app.tags", vec!["a".into(), "b".into()]);
        drop(store);

        let reopened = FilePropertyStore::open(&path).unwrap();
        assert_eq!(reopened.get_string("app.deploytype", ""), "production");
        assert!(reopened.get_bool("app.analytics", false));
        assert_eq!(
            reopened.get_list("app.tags", &[]),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_remove_persists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("props.json");

        let store = FilePropertyStore::open(&path).unwrap();
        store.set_int("count", 5);
        assert!(store.remove_property("count"));
        drop(store);

        let reopened = FilePropertyStore::open(&path).unwrap();
        assert!(!reopened.has_property("count"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("props.json");
        std::fs::write(&path, "not json").unwrap();

        let result = FilePropertyStore::open(&path);
        assert!(matches!(result, Err(PropertyError::Corrupt { .. })));
    }
}
