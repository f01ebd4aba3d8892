//! Schema type definitions
//!
//! Supported column types:
//! - string: UTF-8 string, optionally bounded by byte length
//! - int: 64-bit signed integer, bounded above by `max_int_value`
//!
//! Record values are a closed sum type. A value that does not match its
//! column's type is a variant mismatch, never a coercion.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Supported column types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
}

impl ColumnType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Int => "int",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Column definition.
///
/// Both bounds are always present; only the one matching `data_type` is
/// consulted during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name, unique within its table
    pub name: String,
    /// Declared value type
    pub data_type: ColumnType,
    /// Maximum string length in bytes; 0 means unlimited
    #[serde(default, deserialize_with = "deserialize_max_string_length")]
    pub max_string_length: usize,
    /// Inclusive upper bound for int values
    #[serde(default = "default_max_int_value")]
    pub max_int_value: i64,
}

fn default_max_int_value() -> i64 {
    i64::MAX
}

/// Negative lengths are accepted and read as 0 (unlimited).
fn deserialize_max_string_length<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(usize::try_from(raw).unwrap_or(0))
}

impl Column {
    /// Create a column with every field spelled out
    pub fn new(
        name: impl Into<String>,
        data_type: ColumnType,
        max_string_length: usize,
        max_int_value: i64,
    ) -> Self {
        Self {
            name: name.into(),
            data_type,
            max_string_length,
            max_int_value,
        }
    }

    /// Create a string column. A `max_length` of 0 means unlimited.
    pub fn string(name: impl Into<String>, max_length: usize) -> Self {
        Self::new(name, ColumnType::String, max_length, default_max_int_value())
    }

    /// Create an int column rejecting values above `max_value`
    pub fn int(name: impl Into<String>, max_value: i64) -> Self {
        Self::new(name, ColumnType::Int, 0, max_value)
    }
}

/// Returns the first column name that appears more than once, if any.
pub fn duplicate_column(columns: &[Column]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(columns.len());
    columns
        .iter()
        .map(|c| c.name.as_str())
        .find(|name| !seen.insert(*name))
}

/// A single record value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// String value
    String(String),
    /// Integer value
    Int(i64),
}

impl Value {
    /// Returns the column type this value inhabits
    pub fn kind(&self) -> ColumnType {
        match self {
            Value::String(_) => ColumnType::String,
            Value::Int(_) => ColumnType::Int,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Int(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::String(_) => None,
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{:?}", s),
            Value::Int(i) => write!(f, "{}", i),
        }
    }
}

/// One row: column name to value.
///
/// Keys are kept sorted so display and serialization are deterministic.
/// Keys that match no declared column are stored as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    /// Set a field, returning the previous value if any
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(column.into(), value.into())
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", k, v)?;
        }
        f.write_str("}")
    }
}
