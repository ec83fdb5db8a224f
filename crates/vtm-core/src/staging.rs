//! Scoped staging directory for the downloaded video.
//!
//! The directory is created up front and removed when the guard leaves
//! scope, so every exit path of a run deletes the staging area.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Guard owning the staging directory for one run.
pub struct Staging {
    path: PathBuf,
}

impl Staging {
    /// Creates the staging directory, including parents. Pre-existing
    /// content (e.g. left by an interrupted run) is not cleared here; it is
    /// removed together with the directory at cleanup.
    pub fn create(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the staging directory and everything in it, surfacing the
    /// error if deletion fails. After a successful close the drop guard has
    /// nothing left to do.
    pub fn close(self) -> io::Result<()> {
        fs::remove_dir_all(&self.path)
    }
}

impl Drop for Staging {
    fn drop(&mut self) {
        if self.path.exists() {
            if let Err(e) = fs::remove_dir_all(&self.path) {
                tracing::warn!(
                    "failed to remove staging dir {}: {}",
                    self.path.display(),
                    e
                );
            }
        }
    }
}
