//! Scoped transient work directory.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tempfile::TempDir;
use walkdir::WalkDir;

use crate::error::PipelineError;

const STAGING_PREFIX: &str = "locgen-";

/// Staging directory of one run, created inside a work root.
///
/// Only what the run created is removed on drop: the staging child always,
/// the work root only when this run created it and it is empty again.
/// Failures to remove either are logged and never surface as errors.
#[derive(Debug)]
pub struct WorkDir {
    root: PathBuf,
    created_root: bool,
    staging: Option<TempDir>,
}

impl WorkDir {
    /// Create `root` if needed, plus a fresh staging directory inside it.
    pub fn acquire(root: impl Into<PathBuf>) -> Result<Self, PipelineError> {
        let root = root.into();
        let created_root = !root.exists();
        fs::create_dir_all(&root).map_err(|e| PipelineError::write(&root, e))?;

        let staging = match tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(&root)
        {
            Ok(staging) => staging,
            Err(err) => {
                if created_root {
                    let _ = fs::remove_dir(&root);
                }
                return Err(PipelineError::write(&root, err));
            }
        };
        tracing::debug!(path = %staging.path().display(), "work directory acquired");

        Ok(Self {
            root,
            created_root,
            staging: Some(staging),
        })
    }

    /// The staging directory of this run.
    pub fn path(&self) -> &Path {
        match &self.staging {
            Some(staging) => staging.path(),
            None => self.root.as_path(),
        }
    }

    /// Every file and directory currently below the staging directory.
    pub fn contents(&self) -> Vec<PathBuf> {
        WalkDir::new(self.path())
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .map(|entry| entry.into_path())
            .collect()
    }

    /// Log the staging directory contents, used when a run fails.
    pub fn log_contents(&self) {
        let contents = self.contents();
        tracing::debug!(
            path = %self.path().display(),
            entries = contents.len(),
            "work directory contents"
        );
        for entry in contents {
            tracing::debug!("  - {}", entry.display());
        }
    }
}

impl Drop for WorkDir {
    fn drop(&mut self) {
        if let Some(staging) = self.staging.take() {
            let path = staging.path().to_path_buf();
            match staging.close() {
                Ok(()) => tracing::debug!(path = %path.display(), "work directory removed"),
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "work directory already removed")
                }
                Err(err) => tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to remove work directory"
                ),
            }
        }

        if !self.created_root {
            return;
        }
        match fs::remove_dir(&self.root) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            // Something else was written there during the run.
            Err(err) if err.kind() == io::ErrorKind::DirectoryNotEmpty => {
                tracing::debug!(path = %self.root.display(), "work root kept, not empty")
            }
            Err(err) => tracing::warn!(
                path = %self.root.display(),
                error = %err,
                "failed to remove work root"
            ),
        }
    }
}
