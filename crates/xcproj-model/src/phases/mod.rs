//! Build phase elements
//!
//! Each phase holds a set of build-file references; files are members by
//! reference, not by containment.

mod frameworks;
mod resources;
mod shell_script;

pub use frameworks::FrameworksBuildPhase;
pub use resources::ResourcesBuildPhase;
pub use shell_script::{PathSet, ShellScriptBuildPhase};

use crate::reference::Reference;
use im::OrdSet;

/// Set of build-file references owned by a phase
pub type FileSet = OrdSet<Reference>;
