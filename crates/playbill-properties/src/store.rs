//! The property store trait.

use crate::value::PropertyValue;

/// A string-keyed property store owned by the host runtime.
///
/// Implementations use interior mutability: the host hands out shared
/// references and components write through them. Every operation is total;
/// typed getters fall back to the caller-supplied default when the key is
/// missing or holds a value of another type, and setters replace any
/// previous value regardless of type.
pub trait PropertyStore: Send + Sync {
    /// Returns the raw value stored under `key`.
    fn get(&self, key: &str) -> Option<PropertyValue>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: PropertyValue);

    /// Returns `true` if `key` is present.
    fn has_property(&self, key: &str) -> bool;

    /// Removes `key`, returning `true` if it was present.
    fn remove_property(&self, key: &str) -> bool;

    /// Returns all keys currently present, sorted.
    fn keys(&self) -> Vec<String>;

    /// Returns the boolean stored under `key`, or `default`.
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(|v| v.as_bool()).unwrap_or(default)
    }

    /// Returns the integer stored under `key`, or `default`.
    fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get(key).and_then(|v| v.as_int()).unwrap_or(default)
    }

    /// Returns the double stored under `key`, or `default`.
    ///
    /// Integer values widen to doubles.
    fn get_double(&self, key: &str, default: f64) -> f64 {
        self.get(key).and_then(|v| v.as_double()).unwrap_or(default)
    }

    /// Returns the string stored under `key`, or `default`.
    fn get_string(&self, key: &str, default: &str) -> String {
        self.get(key)
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_else(|| default.to_string())
    }

    /// Returns the list stored under `key`, or `default`.
    fn get_list(&self, key: &str, default: &[String]) -> Vec<String> {
        self.get(key)
            .and_then(|v| v.as_list().map(<[String]>::to_vec))
            .unwrap_or_else(|| default.to_vec())
    }

    /// Stores a boolean under `key`.
    fn set_bool(&self, key: &str, value: bool) {
        self.set(key, PropertyValue::Bool(value));
    }

    /// Stores an integer under `key`.
    fn set_int(&self, key: &str, value: i64) {
        self.set(key, PropertyValue::Int(value));
    }

    /// Stores a double under `key`.
    fn set_double(&self, key: &str, value: f64) {
        self.set(key, PropertyValue::Double(value));
    }

    /// Stores a string under `key`.
    fn set_string(&self, key: &str, value: &str) {
        self.set(key, PropertyValue::String(value.to_string()));
    }

    /// Stores a string list under `key`.
    fn set_list(&self, key: &str, value: Vec<String>) {
        self.set(key, PropertyValue::List(value));
    }
}
