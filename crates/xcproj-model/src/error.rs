//! Decode error types
//!
//! A decode call is all-or-nothing: it either yields a fully valid element or
//! one of these errors.

/// Why a single field could not be extracted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldProblem {
    /// Required field absent from the record
    Missing,
    /// Field present with an incompatible shape or out-of-range value
    WrongShape {
        expected: String,
        found: String,
    },
}

impl std::fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => f.write_str("missing"),
            Self::WrongShape { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
        }
    }
}

/// Errors while decoding a record into an element
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Required field absent, or any field with the wrong shape
    #[error("missing or invalid field '{field}': {problem}")]
    MissingOrInvalidField { field: String, problem: FieldProblem },

    /// No element variant is registered under this isa
    #[error("unknown element isa: '{0}'")]
    UnknownIsa(String),
}

impl DecodeError {
    /// Create missing-field error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingOrInvalidField {
            field: field.into(),
            problem: FieldProblem::Missing,
        }
    }

    /// Create wrong-shape error
    pub fn wrong_shape(
        field: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::MissingOrInvalidField {
            field: field.into(),
            problem: FieldProblem::WrongShape {
                expected: expected.into(),
                found: found.into(),
            },
        }
    }

    /// Name of the offending field, if the error is about a field
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingOrInvalidField { field, .. } => Some(field),
            Self::UnknownIsa(_) => None,
        }
    }
}

/// Result type alias for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;
