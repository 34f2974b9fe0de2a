//! Decode contract tests
//!
//! Required fields, optional defaults, and the fixed shell script constants.

use pretty_assertions::assert_eq;
use xcproj_model::{
    BuildFile, DecodeError, Element, FieldProblem, FileSet, FrameworksBuildPhase, PlistValue,
    ProjectElement, Record, Reference, ResourcesBuildPhase, ShellScriptBuildPhase,
    TargetDependency,
};
use xcproj_test_utils::{
    build_file_record, frameworks_record, init_tracing, record_from_json, resources_record,
    shell_script_record, target_dependency_record,
};

fn assert_missing<T: ProjectElement>(record: &Record, field: &str) {
    let mut record = record.clone();
    record.remove(field);
    let err = T::decode(Reference::new("ref"), &record).unwrap_err();
    assert_eq!(
        err,
        DecodeError::MissingOrInvalidField {
            field: field.to_string(),
            problem: FieldProblem::Missing,
        },
        "{} without {}",
        T::ISA,
        field
    );
}

#[test]
fn test_resources_phase_decodes_example_record() {
    let phase = ResourcesBuildPhase::decode(Reference::new("ref"), &resources_record()).unwrap();

    assert_eq!(phase.reference().as_str(), "ref");
    assert_eq!(phase.files(), &FileSet::unit(Reference::new("file1")));
    assert_eq!(phase.run_only_for_deployment_postprocessing(), 3);
}

#[test]
fn test_every_required_field_is_enforced() {
    init_tracing();

    for field in ["files", "runOnlyForDeploymentPostprocessing"] {
        assert_missing::<ResourcesBuildPhase>(&resources_record(), field);
        assert_missing::<FrameworksBuildPhase>(&frameworks_record(), field);
    }
    for field in ["files", "shellPath"] {
        assert_missing::<ShellScriptBuildPhase>(&shell_script_record(), field);
    }
    for field in ["target", "targetProxy"] {
        assert_missing::<TargetDependency>(&target_dependency_record(), field);
    }
    assert_missing::<BuildFile>(&build_file_record(), "fileRef");
}

#[test]
fn test_optional_fields_never_fail_when_absent() {
    let mut shell = shell_script_record();
    for field in ["inputPaths", "outputPaths", "shellScript"] {
        shell.remove(field);
    }
    let phase = ShellScriptBuildPhase::decode(Reference::new("ref"), &shell).unwrap();
    assert!(phase.input_paths().is_empty());
    assert!(phase.output_paths().is_empty());
    assert_eq!(phase.shell_script(), None);

    let mut file = build_file_record();
    file.remove("settings");
    let file = BuildFile::decode(Reference::new("ref"), &file).unwrap();
    assert!(file.settings().is_none());
}

#[test]
fn test_shell_script_constants_ignore_record() {
    let conflicting = shell_script_record()
        .with("buildActionMask", 12_i64)
        .with("runOnlyForDeploymentPostprocessing", 1_i64);
    let nonsense = shell_script_record()
        .with("buildActionMask", vec!["x"])
        .with("runOnlyForDeploymentPostprocessing", true);

    let phases = [shell_script_record(), conflicting, nonsense]
        .iter()
        .map(|record| ShellScriptBuildPhase::decode(Reference::new("ref"), record).unwrap())
        .collect::<Vec<_>>();

    for phase in &phases {
        assert_eq!(phase.build_action_mask(), ShellScriptBuildPhase::BUILD_ACTION_MASK);
        assert_eq!(phase.build_action_mask(), 2_147_483_647);
        assert_eq!(phase.run_only_for_deployment_postprocessing(), 0);
    }
    assert_eq!(phases[0], phases[1]);
    assert_eq!(phases[1], phases[2]);
}

#[test]
fn test_wrong_shape_names_the_field() {
    let record = record_from_json(serde_json::json!({
        "target": ["not", "scalar"],
        "targetProxy": "P"
    }));
    let err = TargetDependency::decode(Reference::new("ref"), &record).unwrap_err();
    assert_eq!(
        err,
        DecodeError::MissingOrInvalidField {
            field: "target".to_string(),
            problem: FieldProblem::WrongShape {
                expected: "reference".to_string(),
                found: "array of string".to_string(),
            },
        }
    );
}

#[test]
fn test_wrong_set_element_names_element_shape() {
    let record = record_from_json(serde_json::json!({
        "files": [1, 2],
        "runOnlyForDeploymentPostprocessing": 0
    }));
    let err = FrameworksBuildPhase::decode(Reference::new("ref"), &record).unwrap_err();
    assert_eq!(
        err.to_string(),
        "missing or invalid field 'files': expected array of reference, found array of integer"
    );
}

#[test]
fn test_flag_keeps_full_unsigned_range() {
    let record = frameworks_record().with("runOnlyForDeploymentPostprocessing", 4_294_967_296_i64);
    let frameworks = FrameworksBuildPhase::decode(Reference::new("ref"), &record).unwrap();
    let resources = ResourcesBuildPhase::decode(Reference::new("ref"), &record).unwrap();
    assert_eq!(frameworks.run_only_for_deployment_postprocessing(), 4_294_967_296);
    assert_eq!(resources.run_only_for_deployment_postprocessing(), 4_294_967_296);
}

#[test]
fn test_decode_reports_first_failing_field() {
    let err = ShellScriptBuildPhase::decode(Reference::new("ref"), &Record::new()).unwrap_err();
    assert_eq!(err.field(), Some("files"));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let record = resources_record().with("comments", "anything").with("name", 4_i64);
    let phase = ResourcesBuildPhase::decode(Reference::new("ref"), &record).unwrap();
    assert_eq!(
        phase,
        ResourcesBuildPhase::decode(Reference::new("ref"), &resources_record()).unwrap()
    );
}

#[test]
fn test_element_dispatch_matches_direct_decode() {
    let fixtures = [
        (BuildFile::ISA, build_file_record()),
        (FrameworksBuildPhase::ISA, frameworks_record()),
        (ResourcesBuildPhase::ISA, resources_record()),
        (ShellScriptBuildPhase::ISA, shell_script_record()),
        (TargetDependency::ISA, target_dependency_record()),
    ];

    for (isa, record) in &fixtures {
        let element = Element::decode(isa, Reference::new("ref"), record).unwrap();
        assert_eq!(element.isa(), *isa);
        assert_eq!(element.reference(), &Reference::new("ref"));
    }

    let direct = FrameworksBuildPhase::decode(Reference::new("ref"), &frameworks_record()).unwrap();
    let dispatched =
        Element::decode(FrameworksBuildPhase::ISA, Reference::new("ref"), &frameworks_record())
            .unwrap();
    assert_eq!(dispatched, Element::from(direct));
}

#[test]
fn test_build_file_settings_keep_nested_values() {
    let file = BuildFile::decode(Reference::new("ref"), &build_file_record()).unwrap();
    assert_eq!(file.file_ref().as_str(), "FILE_1");
    assert_eq!(
        file.setting("ATTRIBUTES"),
        Some(&PlistValue::Array(vec![PlistValue::from("Weak")]))
    );
}
