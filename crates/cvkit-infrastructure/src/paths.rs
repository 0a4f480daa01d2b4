//! Platform path resolution for cvkit state files.

use std::path::PathBuf;

use cvkit_core::{CvError, Result};

/// Resolves the directories cvkit stores state under.
///
/// # Directory Structure
///
/// ```text
/// ~/.local/share/cvkit/        # Data directory (platform equivalent elsewhere)
/// └── state/                   # One JSON file per state-store key
///     └── resume-storage.json
/// ```
pub struct CvkitPaths;

impl CvkitPaths {
    /// Returns the cvkit data directory for this platform.
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("cvkit"))
            .ok_or_else(|| CvError::storage("cannot determine platform data directory"))
    }

    /// Returns the directory the file-backed state store writes to.
    pub fn state_dir() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("state"))
    }
}
