//! Project element trait and the polymorphic element
//!
//! Defines the [`ProjectElement`] trait implemented by every reference-keyed
//! element variant, and [`Element`], the closed sum over them.
//!
//! # Identity
//! Equality compares every field. Hashing looks at the [`Reference`] only, so
//! two elements sharing a reference but differing in content hash alike while
//! comparing unequal. Equal elements always share a reference, which keeps
//! `Hash` consistent with `Eq`. Reference-keyed graph lookups rely on this.

use crate::build_file::BuildFile;
use crate::error::{DecodeError, DecodeResult};
use crate::phases::{FrameworksBuildPhase, ResourcesBuildPhase, ShellScriptBuildPhase};
use crate::reference::Reference;
use crate::target_dependency::TargetDependency;
use crate::value::Record;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

/// Trait for reference-keyed project elements
///
/// This trait is **sealed** - only element types defined within this crate
/// can implement it.
///
/// # Contract
/// - `decode` is pure and all-or-nothing
/// - decoding the same `(reference, record)` twice yields equal values
/// - `Hash` covers `reference()` only
pub trait ProjectElement:
    Send + Sync + 'static + Debug + Clone + PartialEq + Eq + Hash + private::Sealed
{
    /// Type name used by the descriptor serializer
    const ISA: &'static str;

    /// Element identity
    fn reference(&self) -> &Reference;

    /// Validate and convert an untyped record
    ///
    /// # Errors
    /// [`DecodeError::MissingOrInvalidField`] for the first required field
    /// that is absent, or any field with an incompatible shape
    fn decode(reference: Reference, record: &Record) -> DecodeResult<Self>;
}

pub(crate) mod private {
    /// Sealed trait marker
    pub trait Sealed {}
}

/// Implements reference-only hashing for an element type
macro_rules! hash_by_reference {
    ($ty:ty) => {
        impl ::std::hash::Hash for $ty {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(&self.reference, state);
            }
        }
    };
}
pub(crate) use hash_by_reference;

/// Any reference-keyed element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    BuildFile(BuildFile),
    FrameworksBuildPhase(FrameworksBuildPhase),
    ResourcesBuildPhase(ResourcesBuildPhase),
    ShellScriptBuildPhase(ShellScriptBuildPhase),
    TargetDependency(TargetDependency),
}

impl Element {
    /// Every isa this model can decode
    pub const KNOWN_ISAS: [&'static str; 5] = [
        BuildFile::ISA,
        FrameworksBuildPhase::ISA,
        ResourcesBuildPhase::ISA,
        ShellScriptBuildPhase::ISA,
        TargetDependency::ISA,
    ];

    /// Decode a record into the variant named by `isa`
    ///
    /// # Errors
    /// [`DecodeError::UnknownIsa`] if no variant has that isa, otherwise the
    /// variant's own decode error
    pub fn decode(isa: &str, reference: Reference, record: &Record) -> DecodeResult<Self> {
        let element = match isa {
            isa if isa == BuildFile::ISA => Self::BuildFile(BuildFile::decode(reference, record)?),
            isa if isa == FrameworksBuildPhase::ISA => {
                Self::FrameworksBuildPhase(FrameworksBuildPhase::decode(reference, record)?)
            }
            isa if isa == ResourcesBuildPhase::ISA => {
                Self::ResourcesBuildPhase(ResourcesBuildPhase::decode(reference, record)?)
            }
            isa if isa == ShellScriptBuildPhase::ISA => {
                Self::ShellScriptBuildPhase(ShellScriptBuildPhase::decode(reference, record)?)
            }
            isa if isa == TargetDependency::ISA => {
                Self::TargetDependency(TargetDependency::decode(reference, record)?)
            }
            other => {
                tracing::debug!(isa = other, reference = %reference, "unknown element isa");
                return Err(DecodeError::UnknownIsa(other.to_string()));
            }
        };
        tracing::trace!(isa = element.isa(), reference = %element.reference(), "decoded element");
        Ok(element)
    }

    /// Element identity
    #[must_use]
    pub fn reference(&self) -> &Reference {
        match self {
            Self::BuildFile(e) => e.reference(),
            Self::FrameworksBuildPhase(e) => e.reference(),
            Self::ResourcesBuildPhase(e) => e.reference(),
            Self::ShellScriptBuildPhase(e) => e.reference(),
            Self::TargetDependency(e) => e.reference(),
        }
    }

    /// Type name of the wrapped variant
    #[must_use]
    pub fn isa(&self) -> &'static str {
        match self {
            Self::BuildFile(_) => BuildFile::ISA,
            Self::FrameworksBuildPhase(_) => FrameworksBuildPhase::ISA,
            Self::ResourcesBuildPhase(_) => ResourcesBuildPhase::ISA,
            Self::ShellScriptBuildPhase(_) => ShellScriptBuildPhase::ISA,
            Self::TargetDependency(_) => TargetDependency::ISA,
        }
    }
}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.reference().hash(state);
    }
}

macro_rules! element_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Element {
                fn from(element: $variant) -> Self {
                    Self::$variant(element)
                }
            }
        )*
    };
}

element_from!(
    BuildFile,
    FrameworksBuildPhase,
    ResourcesBuildPhase,
    ShellScriptBuildPhase,
    TargetDependency
);
