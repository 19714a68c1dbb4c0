//! Error types for module generation.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while generating dataset modules.
///
/// Every variant carries the path it failed on, so a caller can tell
/// which of the source or destination files is misconfigured.
#[derive(Debug, Error)]
pub enum Error {
    /// A source file could not be read or a generated module could not be written.
    #[error("I/O operation failed on '{}': {source}", path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A source file is not valid JSON.
    #[error("failed to parse JSON in '{}': {source}", path.display())]
    Json {
        /// Source file being parsed.
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the file the operation failed on.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Json { path, .. } => path,
        }
    }
}
