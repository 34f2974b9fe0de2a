//! xcproj Workspace
//!
//! The workspace aggregate: a filesystem location plus the data document
//! found inside it.
//!
//! # Loading
//!
//! ```text
//! location ──exists?──► single-level scan ──► data file ──► WorkspaceDataParser ──► Workspace
//!              │                 │
//!          NotFound        DataNotFound / AmbiguousData
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use xcproj_workspace::Workspace;
//!
//! let workspace = Workspace::open("App.xcworkspace")?;
//! for file_ref in workspace.data().file_refs() {
//!     println!("{}", file_ref.path());
//! }
//! # Ok::<(), xcproj_workspace::WorkspaceError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod config;
pub mod data;
pub mod discovery;
pub mod error;
mod workspace;

// Re-exports for convenience
pub use config::{DiscoveryConfig, MultipleMatchPolicy};
pub use data::{FileRef, WorkspaceData, WorkspaceDataParser, XmlWorkspaceDataParser};
pub use discovery::locate_data_file;
pub use error::{DataError, Result, WorkspaceError};
pub use workspace::Workspace;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
