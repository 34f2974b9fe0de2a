//! Workspace aggregate

use crate::config::DiscoveryConfig;
use crate::data::{WorkspaceData, WorkspaceDataParser, XmlWorkspaceDataParser};
use crate::discovery::locate_data_file;
use crate::error::{DataError, Result, WorkspaceError};
use std::fs;
use std::path::{Path, PathBuf};

/// Workspace location plus its parsed data document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    path: PathBuf,
    data: WorkspaceData,
}

impl Workspace {
    /// Create from an already-parsed document
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, data: WorkspaceData) -> Self {
        Self {
            path: path.into(),
            data,
        }
    }

    /// Load from a workspace location with default discovery and XML parsing
    ///
    /// # Errors
    /// See [`Workspace::open_with`]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, &DiscoveryConfig::default(), &XmlWorkspaceDataParser)
    }

    /// Load from a workspace location
    ///
    /// # Errors
    /// - [`WorkspaceError::NotFound`] if `path` does not exist
    /// - [`WorkspaceError::DataNotFound`] if it holds no data file
    /// - [`WorkspaceError::AmbiguousData`] per `config.on_multiple`
    /// - [`WorkspaceError::Io`] / [`WorkspaceError::InvalidData`] if the data
    ///   file cannot be read or parsed
    pub fn open_with<P>(path: impl AsRef<Path>, config: &DiscoveryConfig, parser: &P) -> Result<Self>
    where
        P: WorkspaceDataParser + ?Sized,
    {
        let path = path.as_ref();
        let data_file = locate_data_file(path, config)?;
        let bytes = fs::read(&data_file).map_err(|e| WorkspaceError::io_error(&data_file, e))?;
        let data = String::from_utf8(bytes)
            .map_err(DataError::from)
            .and_then(|contents| parser.parse(&contents))
            .map_err(|e| WorkspaceError::invalid_data(&data_file, e))?;

        tracing::debug!(
            workspace = %path.display(),
            file_refs = data.file_refs().len(),
            "loaded workspace"
        );
        Ok(Self::new(path, data))
    }

    /// Workspace location
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parsed data document
    #[inline]
    #[must_use]
    pub fn data(&self) -> &WorkspaceData {
        &self.data
    }
}
