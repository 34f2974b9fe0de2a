//! Element references
//!
//! Provides [`Reference`], the opaque identifier every project element is
//! keyed by and that elements use to point at each other.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Opaque element identifier
///
/// Acts both as the primary key of an element and as the pointer other
/// elements store to link to it. The token is never derived from content and
/// its uniqueness across a project is not checked here.
///
/// # Examples
/// ```
/// use xcproj_model::Reference;
///
/// let reference = Reference::new("OBJ_1A2B3C");
/// assert_eq!(reference.as_str(), "OBJ_1A2B3C");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reference(String);

impl Reference {
    /// Create a reference from any string-like token
    #[inline]
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Token as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying token
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Reference {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Reference {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Reference {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl AsRef<str> for Reference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Reference {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn reference_display_is_the_token() {
        let reference = Reference::new("ref");
        assert_eq!(reference.to_string(), "ref");
    }

    #[test]
    fn reference_from_str_never_fails() {
        let reference: Reference = "".parse().unwrap();
        assert_eq!(reference.as_str(), "");
    }

    #[test]
    fn reference_lookup_by_str() {
        let set: HashSet<Reference> = [Reference::from("a"), Reference::from("b")]
            .into_iter()
            .collect();
        assert!(set.contains("a"));
        assert!(!set.contains("c"));
    }

    #[test]
    fn reference_serializes_transparently() {
        let json = serde_json::to_string(&Reference::new("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
        let back: Reference = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Reference::new("abc"));
    }
}
