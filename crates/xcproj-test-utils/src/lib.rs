//! Testing utilities for xcproj workspace
//!
//! Shared record fixtures, hashing helpers, and workspace directory builders.

#![allow(missing_docs)]

use serde_json::json;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use xcproj_model::Record;

/// Minimal workspace data document with two file references
pub const WORKSPACE_DATA_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Workspace
   version = "1.0">
   <FileRef
      location = "group:App.xcodeproj">
   </FileRef>
   <Group
      location = "container:"
      name = "Libraries">
      <FileRef
         location = "group:Pods/Pods.xcodeproj">
      </FileRef>
   </Group>
</Workspace>
"#;

/// Convert JSON into a record, panicking on shapes a record cannot hold
pub fn record_from_json(value: serde_json::Value) -> Record {
    serde_json::from_value(value).expect("fixture JSON must be a valid record")
}

pub fn resources_record() -> Record {
    record_from_json(json!({
        "files": ["file1"],
        "runOnlyForDeploymentPostprocessing": 3
    }))
}

pub fn frameworks_record() -> Record {
    record_from_json(json!({
        "files": ["FW1", "FW2"],
        "runOnlyForDeploymentPostprocessing": 0
    }))
}

pub fn shell_script_record() -> Record {
    record_from_json(json!({
        "files": [],
        "inputPaths": ["$(SRCROOT)/Scripts/input.txt"],
        "outputPaths": ["$(DERIVED_FILE_DIR)/output.txt"],
        "shellPath": "/bin/sh",
        "shellScript": "echo \"Hello\"\n"
    }))
}

pub fn target_dependency_record() -> Record {
    record_from_json(json!({
        "target": "TARGET_1",
        "targetProxy": "PROXY_1"
    }))
}

pub fn build_file_record() -> Record {
    record_from_json(json!({
        "fileRef": "FILE_1",
        "settings": {"ATTRIBUTES": ["Weak"]}
    }))
}

/// Hash with the std `DefaultHasher`
pub fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Create `<root>/<name>` and, when given, a data file inside it
pub fn create_workspace_dir(root: &Path, name: &str, data: Option<(&str, &str)>) -> PathBuf {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).expect("create workspace dir");
    if let Some((file_name, contents)) = data {
        std::fs::write(dir.join(file_name), contents).expect("write workspace data");
    }
    dir
}

/// Install a test subscriber honoring `RUST_LOG`; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
