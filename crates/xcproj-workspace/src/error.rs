//! Error types for workspace loading
//!
//! Covers the filesystem boundary (location and data-file lookup), the data
//! document parser, and discovery configuration.

use quick_xml::events::attributes::AttrError;
use std::path::PathBuf;

/// Errors while parsing a workspace data document
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// Malformed XML
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute
    #[error("attribute error: {0}")]
    Attribute(#[from] AttrError),

    /// Data file is not valid UTF-8
    #[error("invalid utf-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// Document has no `<Workspace>` element
    #[error("missing <Workspace> root element")]
    MissingRoot,
}

/// Errors while locating or loading a workspace
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    /// Workspace location does not exist
    #[error("the workspace cannot be found at {0}")]
    NotFound(PathBuf),

    /// Location exists but holds no matching data file
    #[error("workspace doesn't contain a data file at {0}")]
    DataNotFound(PathBuf),

    /// More than one data file matched and the policy rejects that
    #[error("workspace at {path} contains {count} data files")]
    AmbiguousData { path: PathBuf, count: usize },

    /// IO error while scanning or reading
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file could not be parsed
    #[error("invalid workspace data in {path}: {source}")]
    InvalidData {
        path: PathBuf,
        #[source]
        source: DataError,
    },

    /// Discovery configuration could not be parsed
    #[error("invalid discovery config: {0}")]
    Config(#[from] toml::de::Error),
}

impl WorkspaceError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create data error for path
    pub fn invalid_data(path: impl Into<PathBuf>, source: DataError) -> Self {
        Self::InvalidData {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for workspace operations
pub type Result<T> = std::result::Result<T, WorkspaceError>;
