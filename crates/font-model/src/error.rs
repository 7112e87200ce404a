//! Error types for font loading.

use std::{path::PathBuf, result, time::Duration};

/// Errors that can occur while loading a font file.
///
/// A `LoadError` is fatal for the font it names only. It is `Clone` so the
/// per-run cache can hand the same failure to every reader of a path.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    #[error("timed out after {timeout:?} reading {}", path.display())]
    Timeout { path: PathBuf, timeout: Duration },

    #[error("unsupported font format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to parse font {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

impl LoadError {
    /// Path of the font that failed to load.
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Timeout { path, .. }
            | LoadError::UnsupportedFormat { path }
            | LoadError::Parse { path, .. } => path,
        }
    }
}

pub type Result<T> = result::Result<T, LoadError>;
