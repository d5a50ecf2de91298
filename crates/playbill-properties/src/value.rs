//! Property value types.

use serde::{Deserialize, Serialize};

/// A value stored under a property key.
///
/// The store is typed but loosely so: a key may be rewritten with a value
/// of a different variant at any time, and typed reads fall back to their
/// default when the stored variant does not match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Boolean flag.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Double(f64),
    /// UTF-8 string.
    String(String),
    /// List of strings.
    List(Vec<String>),
}

impl PropertyValue {
    /// Returns the boolean value, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer value, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the numeric value as a double.
    ///
    /// Integers widen to doubles; other variants return `None`.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            PropertyValue::Double(d) => Some(*d),
            PropertyValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Returns the string value, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list value, if this is a `List`.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            PropertyValue::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the variant name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Int(_) => "int",
            PropertyValue::Double(_) => "double",
            PropertyValue::String(_) => "string",
            PropertyValue::List(_) => "list",
        }
    }
}

impl std::fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Int(i) => write!(f, "{}", i),
            PropertyValue::Double(d) => write!(f, "{}", d),
            PropertyValue::String(s) => write!(f, "{}", s),
            PropertyValue::List(l) => write!(f, "{}", l.join(",")),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Double(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(value: Vec<String>) -> Self {
        PropertyValue::List(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_accessors() {
        assert_eq!(PropertyValue::Bool(true).as_bool(), Some(true));
        assert_eq!(PropertyValue::Int(7).as_int(), Some(7));
        assert_eq!(PropertyValue::Double(1.5).as_double(), Some(1.5));
        assert_eq!(PropertyValue::Int(2).as_double(), Some(2.0));
        assert_eq!(PropertyValue::String("x".into()).as_str(), Some("x"));
        assert_eq!(PropertyValue::Bool(true).as_int(), None);
        assert_eq!(PropertyValue::String("1".into()).as_bool(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(PropertyValue::Bool(false).to_string(), "false");
        assert_eq!(PropertyValue::Int(-3).to_string(), "-3");
        assert_eq!(
            PropertyValue::List(vec!["a".into(), "b".into()]).to_string(),
            "a,b"
        );
    }

    #[test]
    fn test_json_round_trip_keeps_variants() {
        let values = vec![
            PropertyValue::Bool(true),
            PropertyValue::Int(42),
            PropertyValue::Double(2.25),
            PropertyValue::String("test".into()),
            PropertyValue::List(vec!["a".into(), "b".into()]),
        ];
        let json = serde_json::to_string(&values).unwrap();
        let back: Vec<PropertyValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }
}
