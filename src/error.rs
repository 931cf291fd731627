//! Error taxonomy for the generation pipeline.
//!
//! Every variant is fatal to a run. The CLI maps any of them to exit code 1.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while loading a catalog or writing locale files.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The catalog source does not exist.
    #[error("translation file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The catalog source exists but is malformed or cannot be evaluated.
    #[error("failed to load translation catalog {}: {message}", path.display())]
    Load { path: PathBuf, message: String },

    /// A filesystem operation on the output side failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PipelineError {
    pub fn load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Load {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
