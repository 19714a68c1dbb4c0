use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading datasets from disk.
#[derive(Debug, Error)]
pub enum Error {
    /// A dataset file could not be read (typically: not found at the resolved path).
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A dataset file is not valid JSON or does not match the dataset schema.
    #[error("failed to parse '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The current working directory could not be determined.
    #[error("cannot resolve the current working directory: {0}")]
    WorkingDirectory(#[source] io::Error),
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

    /// Whether the error means a dataset file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }

    /// Whether the error means a dataset file exists but could not be parsed.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Json { .. })
    }

    /// Path of the dataset file involved, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } | Self::Json { path, .. } => Some(path),
            Self::WorkingDirectory(_) => None,
        }
    }
}
