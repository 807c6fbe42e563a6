//! Dynamically typed attribute values

use crate::error::{AudienceError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single attribute value: string, number, bool or null
///
/// Deserializes untagged, so `{"age": 31, "browser": "chrome"}` maps straight
/// into [`Attributes`](crate::attribute::Attributes).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl AttributeValue {
    /// Name of the value's type, used in log messages
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Null => "null",
            AttributeValue::Bool(_) => "bool",
            AttributeValue::Number(_) => "number",
            AttributeValue::String(_) => "string",
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Finite numbers only; NaN and infinities are not comparable
    #[inline]
    pub fn as_finite_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

// Structural equality: numbers compare by bit pattern so that the type can be
// `Eq + Hash` and serve as part of a rule dedup key.
impl PartialEq for AttributeValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AttributeValue::Null, AttributeValue::Null) => true,
            (AttributeValue::Bool(a), AttributeValue::Bool(b)) => a == b,
            (AttributeValue::Number(a), AttributeValue::Number(b)) => a.to_bits() == b.to_bits(),
            (AttributeValue::String(a), AttributeValue::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for AttributeValue {}

impl Hash for AttributeValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            AttributeValue::Null => {}
            AttributeValue::Bool(b) => b.hash(state),
            AttributeValue::Number(n) => n.to_bits().hash(state),
            AttributeValue::String(s) => s.hash(state),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Null => f.write_str("null"),
            AttributeValue::Bool(b) => write!(f, "{}", b),
            AttributeValue::Number(n) => write!(f, "{}", n),
            AttributeValue::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Number(value as f64)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Number(value as f64)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttributeValue::Null, Into::into)
    }
}

impl TryFrom<serde_json::Value> for AttributeValue {
    type Error = AudienceError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        match value {
            Value::Null => Ok(AttributeValue::Null),
            Value::Bool(b) => Ok(AttributeValue::Bool(b)),
            Value::Number(n) => n.as_f64().map(AttributeValue::Number).ok_or_else(|| {
                AudienceError::UnsupportedAttribute(format!("number out of range: {}", n))
            }),
            Value::String(s) => Ok(AttributeValue::String(s)),
            Value::Array(_) => Err(AudienceError::UnsupportedAttribute(
                "arrays are not attribute values".to_string(),
            )),
            Value::Object(_) => Err(AudienceError::UnsupportedAttribute(
                "objects are not attribute values".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Attributes;
    use serde_json::json;

    #[test]
    fn test_structural_equality() {
        assert_eq!(AttributeValue::from(1.5), AttributeValue::Number(1.5));
        assert_ne!(AttributeValue::from(1), AttributeValue::from("1"));
        assert_ne!(AttributeValue::Number(0.0), AttributeValue::Number(-0.0));
        assert_eq!(AttributeValue::Number(f64::NAN), AttributeValue::Number(f64::NAN));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(AttributeValue::from(None::<&str>), AttributeValue::Null);
        assert_eq!(AttributeValue::from(Some(true)), AttributeValue::Bool(true));
    }

    #[test]
    fn test_display() {
        assert_eq!(AttributeValue::from("chrome").to_string(), "chrome");
        assert_eq!(AttributeValue::from(42).to_string(), "42");
        assert_eq!(AttributeValue::from(2.5).to_string(), "2.5");
        assert_eq!(AttributeValue::Null.to_string(), "null");
    }

    #[test]
    fn test_try_from_json() {
        assert_eq!(
            AttributeValue::try_from(json!("firefox")).unwrap(),
            AttributeValue::from("firefox")
        );
        assert_eq!(AttributeValue::try_from(json!(7)).unwrap(), AttributeValue::from(7));
        assert_eq!(AttributeValue::try_from(json!(null)).unwrap(), AttributeValue::Null);
        assert!(matches!(
            AttributeValue::try_from(json!([1, 2])),
            Err(AudienceError::UnsupportedAttribute(_))
        ));
        assert!(AttributeValue::try_from(json!({"a": 1})).is_err());
    }

    #[test]
    fn test_deserialize_attribute_map() {
        let attrs: Attributes =
            serde_json::from_str(r#"{"browser": "chrome", "age": 31, "beta": true, "plan": null}"#)
                .unwrap();

        assert_eq!(attrs["browser"], AttributeValue::from("chrome"));
        assert_eq!(attrs["age"], AttributeValue::from(31));
        assert_eq!(attrs["beta"], AttributeValue::Bool(true));
        assert_eq!(attrs["plan"], AttributeValue::Null);
    }
}
