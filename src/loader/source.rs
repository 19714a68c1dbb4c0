use super::error::Error;
use crate::dataset::Dataset;
use std::env;
use std::path::{Path, PathBuf};

/// How the base directory of a [`DataSource`] was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// The process working directory, assumed to be the project root.
    WorkingDirectory,
    /// The crate's own on-disk root, independent of the working directory.
    InstallLocation,
    /// A directory supplied by the caller.
    Explicit,
}

/// Directory holding the three canonical dataset files.
///
/// The caller picks the strategy matching its deployment; nothing is
/// guessed from the calling context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    base_dir: PathBuf,
    strategy: Strategy,
}

impl DataSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            strategy: Strategy::Explicit,
        }
    }

    /// Resolves against the current working directory.
    ///
    /// Only valid for source checkouts run from the project root.
    pub fn working_directory() -> Result<Self, Error> {
        let base_dir = env::current_dir().map_err(Error::WorkingDirectory)?;
        Ok(Self {
            base_dir,
            strategy: Strategy::WorkingDirectory,
        })
    }

    /// Resolves against the crate root this library was built from.
    pub fn install_location() -> Self {
        Self {
            base_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")),
            strategy: Strategy::InstallLocation,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn path(&self, dataset: Dataset) -> PathBuf {
        self.base_dir.join(dataset.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_source_joins_file_names() {
        let source = DataSource::new("/opt/data");
        assert_eq!(source.strategy(), Strategy::Explicit);
        assert_eq!(
            source.path(Dataset::ElementColors),
            PathBuf::from("/opt/data/element-colors.json")
        );
    }

    #[test]
    fn install_location_is_absolute_and_has_data() {
        let source = DataSource::install_location();
        assert!(source.base_dir().is_absolute());
        for dataset in Dataset::ALL {
            assert!(source.path(dataset).is_file(), "{dataset} missing");
        }
    }

    #[test]
    fn working_directory_matches_process_cwd() {
        let source = DataSource::working_directory().unwrap();
        assert_eq!(source.strategy(), Strategy::WorkingDirectory);
        assert_eq!(source.base_dir(), env::current_dir().unwrap());
    }
}
