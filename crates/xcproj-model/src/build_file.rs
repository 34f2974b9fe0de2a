//! Build file element
//!
//! A [`BuildFile`] places one file reference into a build phase, optionally
//! with per-file settings.

use crate::decode::RecordReader;
use crate::element::{hash_by_reference, private, ProjectElement};
use crate::error::DecodeResult;
use crate::reference::Reference;
use crate::value::{PlistValue, Record};
use im::OrdMap;

/// Per-file build settings
pub type BuildSettings = OrdMap<String, PlistValue>;

/// File entry of a build phase
///
/// `settings` distinguishes "no settings" (`None`) from an empty mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildFile {
    reference: Reference,
    file_ref: Reference,
    settings: Option<BuildSettings>,
}

impl BuildFile {
    /// Create with explicit attributes
    #[inline]
    #[must_use]
    pub fn new(reference: Reference, file_ref: Reference, settings: Option<BuildSettings>) -> Self {
        Self {
            reference,
            file_ref,
            settings,
        }
    }

    /// Referenced file element
    #[inline]
    #[must_use]
    pub fn file_ref(&self) -> &Reference {
        &self.file_ref
    }

    /// Build settings, if any
    #[inline]
    #[must_use]
    pub fn settings(&self) -> Option<&BuildSettings> {
        self.settings.as_ref()
    }

    /// Value of a single setting
    #[must_use]
    pub fn setting(&self, key: &str) -> Option<&PlistValue> {
        self.settings.as_ref()?.get(key)
    }

    /// New build file with `key` set to `value`, replacing any previous value
    #[must_use]
    pub fn adding_setting(&self, key: impl Into<String>, value: impl Into<PlistValue>) -> Self {
        let settings = self
            .settings
            .clone()
            .unwrap_or_default()
            .update(key.into(), value.into());
        Self {
            settings: Some(settings),
            ..self.clone()
        }
    }

    /// New build file without `key`
    ///
    /// Absent settings stay absent.
    #[must_use]
    pub fn removing_setting(&self, key: &str) -> Self {
        Self {
            settings: self.settings.as_ref().map(|settings| settings.without(key)),
            ..self.clone()
        }
    }
}

impl private::Sealed for BuildFile {}

impl ProjectElement for BuildFile {
    const ISA: &'static str = "PBXBuildFile";

    #[inline]
    fn reference(&self) -> &Reference {
        &self.reference
    }

    fn decode(reference: Reference, record: &Record) -> DecodeResult<Self> {
        let reader = RecordReader::new(Self::ISA, &reference, record);
        let file_ref = reader.required("fileRef")?;
        let settings = reader.optional("settings")?;
        Ok(Self {
            reference,
            file_ref,
            settings,
        })
    }
}

hash_by_reference!(BuildFile);
