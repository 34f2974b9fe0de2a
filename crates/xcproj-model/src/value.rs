//! Untyped record values
//!
//! [`PlistValue`] is the closed set of shapes an external descriptor parser
//! hands over; [`Record`] is the field-name keyed mapping of them that a
//! single element is decoded from.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// Dynamically-typed record value
///
/// Deserializes untagged, so JSON such as `{"files": ["a", "b"], "flag": 0}`
/// maps directly onto a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlistValue {
    /// Boolean scalar
    Bool(bool),
    /// Integer scalar
    Integer(i64),
    /// String scalar
    String(String),
    /// Ordered sequence
    Array(Vec<PlistValue>),
    /// Nested mapping
    Dictionary(BTreeMap<String, PlistValue>),
}

impl PlistValue {
    /// Shape name used in decode diagnostics
    #[must_use]
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Dictionary(_) => "dictionary",
        }
    }

    /// String payload, if this is a string
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer payload, if this is an integer
    #[inline]
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Array payload, if this is an array
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[PlistValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl Display for PlistValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Array(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
            Self::Dictionary(map) => {
                f.write_str("{")?;
                for (key, value) in map {
                    write!(f, "{key} = {value}; ")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<&str> for PlistValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for PlistValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for PlistValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<u32> for PlistValue {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<bool> for PlistValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<PlistValue>> From<Vec<T>> for PlistValue {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

/// Field-name keyed input to element decoding
///
/// Supplied once at decode time; decoded elements never keep it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, PlistValue>);

impl Record {
    /// Empty record
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[inline]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PlistValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert or replace a field, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PlistValue>) -> Option<PlistValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove a field, returning its value
    pub fn remove(&mut self, key: &str) -> Option<PlistValue> {
        self.0.remove(key)
    }

    /// Look up a field
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PlistValue> {
        self.0.get(key)
    }

    /// Whether the field is present
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate fields in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlistValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<BTreeMap<String, PlistValue>> for Record {
    fn from(map: BTreeMap<String, PlistValue>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<PlistValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
