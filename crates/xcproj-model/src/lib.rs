//! xcproj Element Model
//!
//! Typed, reference-keyed elements of a native IDE project descriptor.
//!
//! # Core Concepts
//!
//! - [`Reference`]: Opaque identifier used as primary key and pointer
//! - [`Record`]: Untyped key/value input produced by a descriptor parser
//! - [`ProjectElement`]: Decode contract implemented by every element variant
//! - [`Element`]: Closed sum over the element variants
//!
//! Elements are immutable. `adding_*` / `removing_*` return a new value and
//! share structure with the receiver through persistent collections.
//!
//! # Example
//!
//! ```
//! use xcproj_model::{ProjectElement, Reference, Record, ResourcesBuildPhase};
//!
//! let record = Record::new()
//!     .with("files", vec!["file1"])
//!     .with("runOnlyForDeploymentPostprocessing", 3_i64);
//! let phase = ResourcesBuildPhase::decode(Reference::new("ref"), &record)?;
//! assert_eq!(phase.run_only_for_deployment_postprocessing(), 3);
//!
//! let phase = phase.adding_file(Reference::new("file2"));
//! assert_eq!(phase.files().len(), 2);
//! # Ok::<(), xcproj_model::DecodeError>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod build_file;
mod decode;
mod element;
mod error;
mod reference;
mod target_dependency;
mod value;

pub mod phases;

// Re-exports
pub use build_file::{BuildFile, BuildSettings};
pub use decode::{FromPlistValue, RecordReader};
pub use element::{Element, ProjectElement};
pub use error::{DecodeError, DecodeResult, FieldProblem};
pub use phases::{FileSet, FrameworksBuildPhase, PathSet, ResourcesBuildPhase, ShellScriptBuildPhase};
pub use reference::Reference;
pub use target_dependency::TargetDependency;
pub use value::{PlistValue, Record};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
