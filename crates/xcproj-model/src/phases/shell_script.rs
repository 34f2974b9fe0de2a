//! Shell script build phase

use super::FileSet;
use crate::decode::RecordReader;
use crate::element::{hash_by_reference, private, ProjectElement};
use crate::error::DecodeResult;
use crate::reference::Reference;
use crate::value::Record;
use im::OrdSet;

/// Unordered, deduplicated set of script input or output paths
pub type PathSet = OrdSet<String>;

/// Build phase running a shell script
///
/// The build action mask and deployment post-processing flag are fixed
/// literals on every instance. Record keys with those names are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellScriptBuildPhase {
    reference: Reference,
    files: FileSet,
    input_paths: PathSet,
    output_paths: PathSet,
    shell_path: String,
    shell_script: Option<String>,
}

impl ShellScriptBuildPhase {
    /// Build action mask of every shell script phase
    pub const BUILD_ACTION_MASK: u32 = 2_147_483_647;

    /// Deployment post-processing flag of every shell script phase
    pub const RUN_ONLY_FOR_DEPLOYMENT_POSTPROCESSING: u64 = 0;

    /// Create with explicit attributes
    #[inline]
    #[must_use]
    pub fn new(
        reference: Reference,
        files: FileSet,
        input_paths: PathSet,
        output_paths: PathSet,
        shell_path: impl Into<String>,
        shell_script: Option<String>,
    ) -> Self {
        Self {
            reference,
            files,
            input_paths,
            output_paths,
            shell_path: shell_path.into(),
            shell_script,
        }
    }

    #[inline]
    #[must_use]
    pub fn build_action_mask(&self) -> u32 {
        Self::BUILD_ACTION_MASK
    }

    #[inline]
    #[must_use]
    pub fn run_only_for_deployment_postprocessing(&self) -> u64 {
        Self::RUN_ONLY_FOR_DEPLOYMENT_POSTPROCESSING
    }

    /// Member build files
    #[inline]
    #[must_use]
    pub fn files(&self) -> &FileSet {
        &self.files
    }

    #[inline]
    #[must_use]
    pub fn input_paths(&self) -> &PathSet {
        &self.input_paths
    }

    #[inline]
    #[must_use]
    pub fn output_paths(&self) -> &PathSet {
        &self.output_paths
    }

    /// Interpreter path, e.g. `/bin/sh`
    #[inline]
    #[must_use]
    pub fn shell_path(&self) -> &str {
        &self.shell_path
    }

    /// Script body
    #[inline]
    #[must_use]
    pub fn shell_script(&self) -> Option<&str> {
        self.shell_script.as_deref()
    }

    /// New phase with `file` added
    #[must_use]
    pub fn adding_file(&self, file: Reference) -> Self {
        Self {
            files: self.files.update(file),
            ..self.clone()
        }
    }

    /// New phase with `file` removed
    #[must_use]
    pub fn removing_file(&self, file: &Reference) -> Self {
        Self {
            files: self.files.without(file),
            ..self.clone()
        }
    }

    /// New phase with an input path added
    #[must_use]
    pub fn adding_input_path(&self, path: impl Into<String>) -> Self {
        Self {
            input_paths: self.input_paths.update(path.into()),
            ..self.clone()
        }
    }

    /// New phase with an input path removed
    #[must_use]
    pub fn removing_input_path(&self, path: &str) -> Self {
        Self {
            input_paths: self.input_paths.without(path),
            ..self.clone()
        }
    }

    /// New phase with an output path added
    #[must_use]
    pub fn adding_output_path(&self, path: impl Into<String>) -> Self {
        Self {
            output_paths: self.output_paths.update(path.into()),
            ..self.clone()
        }
    }

    /// New phase with an output path removed
    #[must_use]
    pub fn removing_output_path(&self, path: &str) -> Self {
        Self {
            output_paths: self.output_paths.without(path),
            ..self.clone()
        }
    }
}

impl private::Sealed for ShellScriptBuildPhase {}

impl ProjectElement for ShellScriptBuildPhase {
    const ISA: &'static str = "PBXShellScriptBuildPhase";

    #[inline]
    fn reference(&self) -> &Reference {
        &self.reference
    }

    fn decode(reference: Reference, record: &Record) -> DecodeResult<Self> {
        let reader = RecordReader::new(Self::ISA, &reference, record);
        let files = reader.required("files")?;
        let input_paths = reader.optional_or_default("inputPaths")?;
        let output_paths = reader.optional_or_default("outputPaths")?;
        let shell_path = reader.required("shellPath")?;
        let shell_script = reader.optional("shellScript")?;
        Ok(Self {
            reference,
            files,
            input_paths,
            output_paths,
            shell_path,
            shell_script,
        })
    }
}

hash_by_reference!(ShellScriptBuildPhase);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::PlistValue;

    fn test_record() -> Record {
        Record::new()
            .with("files", vec!["f1", "f2"])
            .with("inputPaths", vec!["$(SRCROOT)/in.txt"])
            .with("outputPaths", vec!["$(DERIVED_FILE_DIR)/out.txt"])
            .with("shellPath", "/bin/sh")
            .with("shellScript", "echo hi")
    }

    #[test]
    fn decode_reads_attributes() {
        let phase = ShellScriptBuildPhase::decode(Reference::new("ref"), &test_record()).unwrap();
        assert_eq!(phase.files().len(), 2);
        assert!(phase.input_paths().contains("$(SRCROOT)/in.txt"));
        assert!(phase.output_paths().contains("$(DERIVED_FILE_DIR)/out.txt"));
        assert_eq!(phase.shell_path(), "/bin/sh");
        assert_eq!(phase.shell_script(), Some("echo hi"));
    }

    #[test]
    fn decode_defaults_optional_fields() {
        let record = Record::new().with("files", PlistValue::Array(Vec::new())).with("shellPath", "/bin/sh");
        let phase = ShellScriptBuildPhase::decode(Reference::new("ref"), &record).unwrap();
        assert!(phase.input_paths().is_empty());
        assert!(phase.output_paths().is_empty());
        assert_eq!(phase.shell_script(), None);
    }

    #[test]
    fn decode_requires_shell_path() {
        let mut record = test_record();
        record.remove("shellPath");
        let err = ShellScriptBuildPhase::decode(Reference::new("ref"), &record).unwrap_err();
        assert_eq!(err.field(), Some("shellPath"));
    }

    #[test]
    fn decode_type_checks_present_optional_fields() {
        let record = test_record().with("inputPaths", "not-a-list");
        let err = ShellScriptBuildPhase::decode(Reference::new("ref"), &record).unwrap_err();
        assert_eq!(err.field(), Some("inputPaths"));
    }

    #[test]
    fn decode_ignores_fixed_constant_keys() {
        let record = test_record()
            .with("buildActionMask", 8_i64)
            .with("runOnlyForDeploymentPostprocessing", "garbage");
        let phase = ShellScriptBuildPhase::decode(Reference::new("ref"), &record).unwrap();
        assert_eq!(phase.build_action_mask(), 2_147_483_647);
        assert_eq!(phase.run_only_for_deployment_postprocessing(), 0);
    }

    #[test]
    fn path_mutations_are_persistent() {
        let original = ShellScriptBuildPhase::decode(Reference::new("ref"), &test_record()).unwrap();

        let with_input = original.adding_input_path("a.txt");
        assert!(with_input.input_paths().contains("a.txt"));
        assert!(!original.input_paths().contains("a.txt"));

        let without_output = original.removing_output_path("$(DERIVED_FILE_DIR)/out.txt");
        assert!(without_output.output_paths().is_empty());
        assert_eq!(original.output_paths().len(), 1);

        let with_output = original.adding_output_path("b.txt");
        assert_eq!(with_output.output_paths().len(), 2);
        assert_eq!(with_output.input_paths(), original.input_paths());
    }

    #[test]
    fn removing_input_path_round_trips() {
        let original = ShellScriptBuildPhase::decode(Reference::new("ref"), &test_record()).unwrap();
        let got = original.adding_input_path("x").removing_input_path("x");
        assert_eq!(got, original);
    }

    #[test]
    fn file_mutations_keep_other_fields() {
        let original = ShellScriptBuildPhase::decode(Reference::new("ref"), &test_record()).unwrap();
        let got = original.removing_file(&Reference::new("f1")).adding_file(Reference::new("f3"));
        assert_eq!(got.files().len(), 2);
        assert_eq!(got.shell_script(), original.shell_script());
        assert_eq!(got.shell_path(), original.shell_path());
    }

    #[test]
    fn isa_is_shell_script_build_phase() {
        assert_eq!(ShellScriptBuildPhase::ISA, "PBXShellScriptBuildPhase");
    }
}
