//! Resource copy build phase

use super::FileSet;
use crate::decode::RecordReader;
use crate::element::{hash_by_reference, private, ProjectElement};
use crate::error::DecodeResult;
use crate::reference::Reference;
use crate::value::Record;

/// Build phase copying resources into the product bundle
///
/// `run_only_for_deployment_postprocessing` is passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcesBuildPhase {
    reference: Reference,
    files: FileSet,
    run_only_for_deployment_postprocessing: u64,
}

impl ResourcesBuildPhase {
    /// Create with explicit attributes
    #[inline]
    #[must_use]
    pub fn new(reference: Reference, files: FileSet, run_only_for_deployment_postprocessing: u64) -> Self {
        Self {
            reference,
            files,
            run_only_for_deployment_postprocessing,
        }
    }

    /// Member build files
    #[inline]
    #[must_use]
    pub fn files(&self) -> &FileSet {
        &self.files
    }

    /// Deployment post-processing flag
    #[inline]
    #[must_use]
    pub fn run_only_for_deployment_postprocessing(&self) -> u64 {
        self.run_only_for_deployment_postprocessing
    }

    /// New phase with `file` added; no-op if already a member
    #[must_use]
    pub fn adding_file(&self, file: Reference) -> Self {
        Self {
            files: self.files.update(file),
            ..self.clone()
        }
    }

    /// New phase with `file` removed; no-op if not a member
    #[must_use]
    pub fn removing_file(&self, file: &Reference) -> Self {
        Self {
            files: self.files.without(file),
            ..self.clone()
        }
    }
}

impl private::Sealed for ResourcesBuildPhase {}

impl ProjectElement for ResourcesBuildPhase {
    const ISA: &'static str = "PBXResourcesBuildPhase";

    #[inline]
    fn reference(&self) -> &Reference {
        &self.reference
    }

    fn decode(reference: Reference, record: &Record) -> DecodeResult<Self> {
        let reader = RecordReader::new(Self::ISA, &reference, record);
        let files = reader.required("files")?;
        let run_only_for_deployment_postprocessing =
            reader.required("runOnlyForDeploymentPostprocessing")?;
        Ok(Self {
            reference,
            files,
            run_only_for_deployment_postprocessing,
        })
    }
}

hash_by_reference!(ResourcesBuildPhase);
