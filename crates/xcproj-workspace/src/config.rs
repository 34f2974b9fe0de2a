//! Discovery configuration
//!
//! Controls which files count as workspace data and what happens when more
//! than one matches.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default data file extension
pub const DEFAULT_DATA_EXTENSION: &str = "xcworkspacedata";

/// Tie-break when several data files match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultipleMatchPolicy {
    /// Take the lexicographically first file name
    #[default]
    FirstSorted,
    /// Fail with [`crate::WorkspaceError::AmbiguousData`]
    Reject,
}

/// Workspace discovery configuration
///
/// Loadable from TOML; missing keys take their defaults.
///
/// ```
/// use xcproj_workspace::{DiscoveryConfig, MultipleMatchPolicy};
///
/// let config = DiscoveryConfig::from_toml_str("on_multiple = \"reject\"")?;
/// assert_eq!(config.on_multiple, MultipleMatchPolicy::Reject);
/// assert_eq!(config.data_extension, "xcworkspacedata");
/// # Ok::<(), xcproj_workspace::WorkspaceError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Extension (without dot) a data file must carry
    pub data_extension: String,
    /// Behavior when several files match
    pub on_multiple: MultipleMatchPolicy,
}

impl DiscoveryConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a TOML document
    ///
    /// # Errors
    /// Returns [`crate::WorkspaceError::Config`] if the TOML is invalid
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// With data file extension
    #[inline]
    #[must_use]
    pub fn with_data_extension(mut self, extension: impl Into<String>) -> Self {
        self.data_extension = extension.into();
        self
    }

    /// With multiple-match policy
    #[inline]
    #[must_use]
    pub fn with_on_multiple(mut self, policy: MultipleMatchPolicy) -> Self {
        self.on_multiple = policy;
        self
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            data_extension: DEFAULT_DATA_EXTENSION.to_string(),
            on_multiple: MultipleMatchPolicy::FirstSorted,
        }
    }
}
