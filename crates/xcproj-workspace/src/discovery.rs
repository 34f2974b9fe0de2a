//! Data file discovery
//!
//! Single-level scan of a workspace location for data files.

use crate::config::{DiscoveryConfig, MultipleMatchPolicy};
use crate::error::{Result, WorkspaceError};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Every data file directly under `location`, sorted by path
///
/// Does not check that `location` exists; a location that is not a directory
/// has no data files.
///
/// # Errors
/// Returns [`WorkspaceError::Io`] if the directory cannot be read
pub fn data_files(location: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !location.is_dir() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(location).map_err(|e| WorkspaceError::io_error(location, e))?;
    let mut matches = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| WorkspaceError::io_error(location, e))?.path();
        if path.is_file() && path.extension().and_then(OsStr::to_str) == Some(extension) {
            matches.push(path);
        }
    }
    matches.sort();
    Ok(matches)
}

/// Locate the one data file a workspace is loaded from
///
/// # Errors
/// - [`WorkspaceError::NotFound`] if `location` does not exist
/// - [`WorkspaceError::DataNotFound`] if nothing matches
/// - [`WorkspaceError::AmbiguousData`] if several match under
///   [`MultipleMatchPolicy::Reject`]
pub fn locate_data_file(location: &Path, config: &DiscoveryConfig) -> Result<PathBuf> {
    if !location.exists() {
        tracing::debug!(location = %location.display(), "workspace location does not exist");
        return Err(WorkspaceError::NotFound(location.to_path_buf()));
    }

    let mut candidates = data_files(location, &config.data_extension)?;
    tracing::debug!(
        location = %location.display(),
        candidates = candidates.len(),
        "scanned workspace for data files"
    );

    match (candidates.len(), config.on_multiple) {
        (0, _) => Err(WorkspaceError::DataNotFound(location.to_path_buf())),
        (1, _) | (_, MultipleMatchPolicy::FirstSorted) => {
            let chosen = candidates.swap_remove(0);
            tracing::trace!(data_file = %chosen.display(), "selected workspace data file");
            Ok(chosen)
        }
        (count, MultipleMatchPolicy::Reject) => Err(WorkspaceError::AmbiguousData {
            path: location.to_path_buf(),
            count,
        }),
    }
}
