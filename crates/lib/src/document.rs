//! Document values.
//!
//! A [`Document`] is an [`OrderedMap`] from field names to [`Value`]s. Decoders
//! build one by calling `set` for each field in wire order; encoders walk it with
//! `iter()`, which yields the fields back in that same order.
//!
//! ```
//! use ordered_hash::document::{Document, DocumentExt, Value};
//!
//! let mut doc = Document::new();
//! doc.put("name", "Alice");
//! doc.put("age", 30);
//!
//! assert_eq!(doc.get_text("name"), Some("Alice"));
//! assert!(doc["age"] == 30);
//! ```

use std::fmt;

use crate::map::OrderedMap;

/// An ordered set of named fields.
pub type Document = OrderedMap<String, Value>;

/// A field value within a [`Document`].
///
/// `Value` implements `PartialEq` against the matching Rust primitives, so a
/// field can be compared directly:
///
/// ```
/// use ordered_hash::document::Value;
///
/// assert!(Value::Int(42) == 42);
/// assert!(Value::from("hello") == "hello");
/// assert!(!(Value::Int(42) == "42"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    /// Unsigned integers that do not fit in `i64`; smaller ones decode as `Int`
    UInt(u64),
    Double(f64),
    Text(String),
    Array(Vec<Value>),
    Document(Document),
}

impl Value {
    /// Returns a human-readable name for this value type
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Double(_) => "double",
            Value::Text(_) => "text",
            Value::Array(_) => "array",
            Value::Document(_) => "document",
        }
    }

    /// Check if this is the null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the boolean, if this is a `Bool`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the signed integer, if this is an `Int`
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the value as an unsigned integer, from a `UInt` or a non-negative `Int`
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Value::UInt(n) => Some(*n),
            Value::Int(n) => u64::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Get the float, if this is a `Double`
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the string slice, if this is `Text`
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the items, if this is an `Array`
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get the nested document, if this is a `Document`
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Value::Document(doc) => Some(doc),
            _ => None,
        }
    }

    /// Get the nested document mutably, if this is a `Document`
    pub fn as_document_mut(&mut self) -> Option<&mut Document> {
        match self {
            Value::Document(doc) => Some(doc),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Value::UInt(n), Value::Int)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Document(doc)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

// Comparisons with primitives; a type mismatch is simply unequal.

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self.as_int() == Some(i64::from(*other))
    }
}

impl PartialEq<u64> for Value {
    fn eq(&self, other: &u64) -> bool {
        self.as_uint() == Some(*other)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        self.as_double() == Some(*other)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

/// Field-level helpers for [`Document`].
pub trait DocumentExt {
    /// Set a field, converting the name and value. Same ordering rules as
    /// [`OrderedMap::set`].
    fn put(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value>;

    fn get_bool(&self, name: &str) -> Option<bool>;

    fn get_int(&self, name: &str) -> Option<i64>;

    fn get_double(&self, name: &str) -> Option<f64>;

    fn get_text(&self, name: &str) -> Option<&str>;

    fn get_document(&self, name: &str) -> Option<&Document>;
}

impl DocumentExt for Document {
    fn put(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.set(name.into(), value.into())
    }

    fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int)
    }

    fn get_double(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_double)
    }

    fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_text)
    }

    fn get_document(&self, name: &str) -> Option<&Document> {
        self.get(name).and_then(Value::as_document)
    }
}
