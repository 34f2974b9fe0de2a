//! Target dependency element

use crate::decode::RecordReader;
use crate::element::{hash_by_reference, private, ProjectElement};
use crate::error::DecodeResult;
use crate::reference::Reference;
use crate::value::Record;

/// Link from one target to another through a container item proxy
///
/// Neither reference is checked for existence or cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDependency {
    reference: Reference,
    target: Reference,
    target_proxy: Reference,
}

impl TargetDependency {
    /// Create with explicit attributes
    #[inline]
    #[must_use]
    pub fn new(reference: Reference, target: Reference, target_proxy: Reference) -> Self {
        Self {
            reference,
            target,
            target_proxy,
        }
    }

    /// Depended-upon target
    #[inline]
    #[must_use]
    pub fn target(&self) -> &Reference {
        &self.target
    }

    /// Proxy standing in for the target
    #[inline]
    #[must_use]
    pub fn target_proxy(&self) -> &Reference {
        &self.target_proxy
    }
}

impl private::Sealed for TargetDependency {}

impl ProjectElement for TargetDependency {
    const ISA: &'static str = "PBXTargetDependency";

    #[inline]
    fn reference(&self) -> &Reference {
        &self.reference
    }

    fn decode(reference: Reference, record: &Record) -> DecodeResult<Self> {
        let reader = RecordReader::new(Self::ISA, &reference, record);
        let target = reader.required("target")?;
        let target_proxy = reader.required("targetProxy")?;
        Ok(Self {
            reference,
            target,
            target_proxy,
        })
    }
}

hash_by_reference!(TargetDependency);
