//! In-memory property store.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::trace;

use crate::store::PropertyStore;
use crate::value::PropertyValue;

/// An in-memory property store.
///
/// This is the store a host creates for a process that has no persistent
/// configuration, and the fixture of choice in tests. Contents are lost at
/// process teardown.
#[derive(Debug, Default)]
pub struct MemoryPropertyStore {
    entries: RwLock<HashMap<String, PropertyValue>>,
}

impl MemoryPropertyStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`.
    pub fn with_entries(entries: HashMap<String, PropertyValue>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Returns the number of properties present.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if no properties are present.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns a snapshot of the current contents.
    pub fn snapshot(&self) -> HashMap<String, PropertyValue> {
        self.read().clone()
    }

    // A poisoned lock still guards a structurally intact map, so both
    // paths recover the guard instead of propagating the panic.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, PropertyValue>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, PropertyValue>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl PropertyStore for MemoryPropertyStore {
    fn get(&self, key: &str) -> Option<PropertyValue> {
        self.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: PropertyValue) {
        trace!(key, value_type = value.type_name(), "property set");
        self.write().insert(key.to_string(), value);
    }

    fn has_property(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    fn remove_property(&self, key: &str) -> bool {
        trace!(key, "property removed");
        self.write().remove(key).is_some()
    }

    fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.read().keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_falls_back_to_default() {
        let store = MemoryPropertyStore::new();
        assert!(store.get_bool("missing", true));
        assert_eq!(store.get_int("missing", 9), 9);
        assert_eq!(store.get_string("missing", "fallback"), "fallback");
    }

    #[test]
    fn test_set_then_get() {
        let store = MemoryPropertyStore::new();
        store.set_string("app.name", "Skylark");
        store.set_bool("app.analytics", false);
        store.set_int("app.launches", 3);

        assert_eq!(store.get_string("app.name", ""), "Skylark");
        assert!(!store.get_bool("app.analytics", true));
        assert_eq!(store.get_int("app.launches", 0), 3);
    }

    #[test]
    fn test_type_mismatch_yields_default() {
        let store = MemoryPropertyStore::new();
        store.set_string("flag", "yes");
        assert!(store.get_bool("flag", true));
        assert_eq!(store.get_int("flag", -1), -1);
    }

    #[test]
    fn test_set_replaces_across_types() {
        let store = MemoryPropertyStore::new();
        store.set_int("key", 1);
        store.set_string("key", "one");
        assert_eq!(store.get("key"), Some("one".into()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_has_and_remove() {
        let store = MemoryPropertyStore::new();
        assert!(!store.has_property("k"));
        store.set_bool("k", true);
        assert!(store.has_property("k"));
        assert!(store.remove_property("k"));
        assert!(!store.remove_property("k"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_keys_sorted() {
        let store = MemoryPropertyStore::new();
        store.set_int("b", 2);
        store.set_int("a", 1);
        store.set_int("c", 3);
        assert_eq!(store.keys(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_int_widens_to_double() {
        let store = MemoryPropertyStore::new();
        store.set_int("n", 4);
        assert_eq!(store.get_double("n", 0.0), 4.0);
    }
}
