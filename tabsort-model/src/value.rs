//! Runtime cell values.
//!
//! Query results arrive from heterogeneous upstream stores whose column types
//! are only known per row, so cells carry their own kind. Comparison code
//! classifies values through [`Value::kind`] rather than relying on the
//! declared [`ColumnClass`] of a column.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use std::fmt;

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    #[default]
    Null,
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    Bytes(Vec<u8>),
    List(Vec<Value>),
}

/// Coarse classification used by comparators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    /// Comparable as a 64-bit float.
    Number,
    /// Has a native total order among values of the same kind.
    Orderable(OrderableKind),
    /// No native order; only the string form can be compared.
    Opaque,
}

/// Natively ordered value kinds. Values of different kinds are not
/// comparable with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderableKind {
    Bool,
    Text,
    Date,
    Timestamp,
}

impl Value {
    pub const NULL: Value = Value::Null;

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Integer(_) | Value::Float(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Orderable(OrderableKind::Bool),
            Value::Text(_) => ValueKind::Orderable(OrderableKind::Text),
            Value::Date(_) => ValueKind::Orderable(OrderableKind::Date),
            Value::Timestamp(_) => {
                ValueKind::Orderable(OrderableKind::Timestamp)
            }
            Value::Bytes(_) | Value::List(_) => ValueKind::Opaque,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of the value. Integers are widened to `f64`; every other
    /// kind yields `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Text(v) => f.write_str(v),
            Value::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
            Value::Timestamp(v) => {
                f.write_str(&v.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Value::Bytes(bytes) => {
                f.write_str("0x")?;
                for byte in bytes {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Value::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Declared type of a column, as reported by a table model.
///
/// Purely descriptive: cells of a column may still hold values of another
/// kind (or `Null`), and comparison never trusts this declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColumnClass {
    #[default]
    Any,
    Integer,
    Float,
    Bool,
    Text,
    Date,
    Timestamp,
    Bytes,
    List,
}

impl ColumnClass {
    /// Class a value would naturally declare. `Null` maps to `Any`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ColumnClass::Any,
            Value::Integer(_) => ColumnClass::Integer,
            Value::Float(_) => ColumnClass::Float,
            Value::Bool(_) => ColumnClass::Bool,
            Value::Text(_) => ColumnClass::Text,
            Value::Date(_) => ColumnClass::Date,
            Value::Timestamp(_) => ColumnClass::Timestamp,
            Value::Bytes(_) => ColumnClass::Bytes,
            Value::List(_) => ColumnClass::List,
        }
    }

    /// Whether a value may be stored in a column of this class.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            ColumnClass::Any => true,
            _ => value.is_null() || ColumnClass::of(value) == *self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::from(3).kind(), ValueKind::Number);
        assert_eq!(Value::from(2.5).kind(), ValueKind::Number);
        assert_eq!(
            Value::from("x").kind(),
            ValueKind::Orderable(OrderableKind::Text)
        );
        assert_eq!(Value::Bytes(vec![1]).kind(), ValueKind::Opaque);
        assert_eq!(Value::List(vec![]).kind(), ValueKind::Opaque);
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(10).to_string(), "10");
        assert_eq!(Value::Bytes(vec![0x0a, 0xff]).to_string(), "0x0aff");
        assert_eq!(
            Value::List(vec![Value::from(1), Value::from("a")]).to_string(),
            "[1, a]"
        );
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(Value::from(date).to_string(), "2024-03-09");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::Text("a".into()));
    }

    #[test]
    fn test_column_class_accepts() {
        assert!(ColumnClass::Any.accepts(&Value::from(1)));
        assert!(ColumnClass::Integer.accepts(&Value::Null));
        assert!(ColumnClass::Integer.accepts(&Value::from(1)));
        assert!(!ColumnClass::Integer.accepts(&Value::from("1")));
    }
}
