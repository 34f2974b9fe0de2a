//! Typed field extraction
//!
//! [`FromPlistValue`] converts one untyped value into a typed field;
//! [`RecordReader`] applies the required/optional policy on top of it.
//!
//! # Coercion rules
//! - Sets accept a homogeneous array of matching values and deduplicate it
//! - Integers narrow only when in range; negatives never become unsigned
//! - Nothing else converts implicitly (a string `"3"` is not an integer)

use crate::error::{DecodeError, DecodeResult};
use crate::reference::Reference;
use crate::value::{PlistValue, Record};
use im::{OrdMap, OrdSet};

/// Conversion from a single record value
pub trait FromPlistValue: Sized {
    /// Shape name reported when conversion fails
    const SHAPE: &'static str;

    /// Convert, or `None` if the value has an incompatible shape
    fn from_plist(value: &PlistValue) -> Option<Self>;

    /// Expected shape as shown in diagnostics
    #[must_use]
    fn expected() -> String {
        Self::SHAPE.to_string()
    }
}

impl FromPlistValue for String {
    const SHAPE: &'static str = "string";

    fn from_plist(value: &PlistValue) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromPlistValue for Reference {
    const SHAPE: &'static str = "reference";

    fn from_plist(value: &PlistValue) -> Option<Self> {
        value.as_str().map(Reference::new)
    }
}

impl FromPlistValue for u64 {
    const SHAPE: &'static str = "unsigned integer";

    fn from_plist(value: &PlistValue) -> Option<Self> {
        value.as_integer().and_then(|n| u64::try_from(n).ok())
    }
}

impl FromPlistValue for OrdMap<String, PlistValue> {
    const SHAPE: &'static str = "dictionary";

    fn from_plist(value: &PlistValue) -> Option<Self> {
        match value {
            PlistValue::Dictionary(map) => {
                Some(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            }
            _ => None,
        }
    }
}

impl<T: FromPlistValue + Ord + Clone> FromPlistValue for OrdSet<T> {
    const SHAPE: &'static str = "array";

    fn from_plist(value: &PlistValue) -> Option<Self> {
        value.as_array()?.iter().map(T::from_plist).collect()
    }

    fn expected() -> String {
        format!("array of {}", T::expected())
    }
}

fn describe(value: &PlistValue) -> String {
    match value {
        PlistValue::Integer(n) => format!("integer {n}"),
        PlistValue::Array(items) => {
            let shapes: OrdSet<&'static str> = items.iter().map(PlistValue::shape).collect();
            let shapes: Vec<_> = shapes.into_iter().collect();
            format!("array of {}", shapes.join("|"))
        }
        other => other.shape().to_string(),
    }
}

/// Required/optional field reader over one record
///
/// Carries the isa and reference of the element being decoded so failures
/// are logged with their context.
#[derive(Debug, Clone, Copy)]
pub struct RecordReader<'a> {
    isa: &'static str,
    reference: &'a Reference,
    record: &'a Record,
}

impl<'a> RecordReader<'a> {
    /// Reader for the element `isa` keyed by `reference`
    #[inline]
    #[must_use]
    pub fn new(isa: &'static str, reference: &'a Reference, record: &'a Record) -> Self {
        Self {
            isa,
            reference,
            record,
        }
    }

    /// Extract a field that must be present
    ///
    /// # Errors
    /// [`DecodeError::MissingOrInvalidField`] naming `key` if the field is
    /// absent or has the wrong shape
    pub fn required<T: FromPlistValue>(&self, key: &str) -> DecodeResult<T> {
        match self.record.get(key) {
            Some(value) => self.extract(key, value),
            None => {
                tracing::debug!(
                    isa = self.isa,
                    reference = %self.reference,
                    field = key,
                    "required field missing"
                );
                Err(DecodeError::missing(key))
            }
        }
    }

    /// Extract a field that may be absent
    ///
    /// # Errors
    /// [`DecodeError::MissingOrInvalidField`] naming `key` if the field is
    /// present with the wrong shape
    pub fn optional<T: FromPlistValue>(&self, key: &str) -> DecodeResult<Option<T>> {
        self.record
            .get(key)
            .map(|value| self.extract(key, value))
            .transpose()
    }

    /// Extract an optional field, substituting `T::default()` when absent
    ///
    /// # Errors
    /// Same as [`RecordReader::optional`]
    pub fn optional_or_default<T: FromPlistValue + Default>(&self, key: &str) -> DecodeResult<T> {
        Ok(self.optional(key)?.unwrap_or_default())
    }

    fn extract<T: FromPlistValue>(&self, key: &str, value: &PlistValue) -> DecodeResult<T> {
        T::from_plist(value).ok_or_else(|| {
            let expected = T::expected();
            let found = describe(value);
            tracing::debug!(
                isa = self.isa,
                reference = %self.reference,
                field = key,
                expected = %expected,
                found = %found,
                "field has wrong shape"
            );
            DecodeError::wrong_shape(key, expected, found)
        })
    }
}
