//! Generation of Rust modules embedding the reference datasets.
//!
//! Each canonical JSON file is parsed, re-serialized to canonical text and
//! written as a `pub const <NAME>_JSON: &str` raw string literal. The library
//! `include!`s the same rendering (produced by `build.rs` into `OUT_DIR`),
//! so packaged builds never look for the JSON files at runtime.
//!
//! Generation is not transactional: if the third module fails to write, the
//! first two have already been replaced.

mod error;
mod render;

pub use error::Error;
pub use render::{canonical_json, raw_hash_count, render};

use crate::dataset::Dataset;
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Source and destination directories for module generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory containing the three canonical JSON files.
    pub source_dir: PathBuf,
    /// Directory the generated modules are written to. Must already exist.
    pub dest_dir: PathBuf,
}

impl GeneratorConfig {
    pub fn new(source_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
        }
    }

    pub fn source_path(&self, dataset: Dataset) -> PathBuf {
        self.source_dir.join(dataset.file_name())
    }

    pub fn dest_path(&self, dataset: Dataset) -> PathBuf {
        self.dest_dir.join(dataset.module_file_name())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(".", "generated")
    }
}

/// A generated module written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub dataset: Dataset,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Freshness of a generated module relative to its JSON source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactStatus {
    UpToDate,
    Stale,
    Missing,
}

/// Result of checking one generated module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCheck {
    pub dataset: Dataset,
    pub path: PathBuf,
    pub status: ArtifactStatus,
}

/// Reads and parses a source JSON file without any schema validation.
pub fn read_source(path: &Path) -> Result<Value, Error> {
    debug!("reading {}", path.display());
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| Error::json(path, e))
}

/// Renders the generated module for one dataset from its source file.
pub fn render_dataset(config: &GeneratorConfig, dataset: Dataset) -> Result<String, Error> {
    let source = config.source_path(dataset);
    let value = read_source(&source)?;
    render(dataset, &value).map_err(|e| Error::json(&source, e))
}

/// Generates all three dataset modules, overwriting existing files.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<Artifact>, Error> {
    let mut artifacts = Vec::with_capacity(Dataset::ALL.len());

    for dataset in Dataset::ALL {
        let module = render_dataset(config, dataset)?;
        let path = config.dest_path(dataset);
        fs::write(&path, &module).map_err(|e| Error::io(&path, e))?;
        debug!("wrote {} ({} bytes)", path.display(), module.len());
        artifacts.push(Artifact {
            dataset,
            path,
            bytes: module.len(),
        });
    }

    info!(
        "generated {} dataset modules in {}",
        artifacts.len(),
        config.dest_dir.display()
    );
    Ok(artifacts)
}

/// Compares the generated modules on disk with a fresh rendering.
pub fn check(config: &GeneratorConfig) -> Result<Vec<ArtifactCheck>, Error> {
    let mut checks = Vec::with_capacity(Dataset::ALL.len());

    for dataset in Dataset::ALL {
        let expected = render_dataset(config, dataset)?;
        let path = config.dest_path(dataset);
        let status = match fs::read_to_string(&path) {
            Ok(existing) if existing == expected => ArtifactStatus::UpToDate,
            Ok(_) => ArtifactStatus::Stale,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => ArtifactStatus::Missing,
            Err(e) => return Err(Error::io(&path, e)),
        };
        debug!("{}: {:?}", path.display(), status);
        checks.push(ArtifactCheck {
            dataset,
            path,
            status,
        });
    }

    Ok(checks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_sources(dir: &Path) {
        fs::write(
            dir.join("periodic-table.json"),
            r#"{"H": {"name": "Hydrogen", "atomic_radius_pm": 25}}"#,
        )
        .unwrap();
        fs::write(
            dir.join("element-bonds.json"),
            r#"[{"elements": ["H", "O"], "energy": {"value": 4.75721615, "units": "eV"},
                "length": {"value": 0.96, "units": "angstrom"}, "order": 1}]"#,
        )
        .unwrap();
        fs::write(dir.join("element-colors.json"), r##"{"H": "#FFFFFF"}"##).unwrap();
    }

    fn setup() -> (TempDir, GeneratorConfig) {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dst).unwrap();
        write_sources(&src);
        (tmp, GeneratorConfig::new(src, dst))
    }

    #[test]
    fn generate_writes_three_modules() {
        let (_tmp, config) = setup();
        let artifacts = generate(&config).unwrap();
        assert_eq!(artifacts.len(), 3);
        for artifact in &artifacts {
            assert!(artifact.path.exists());
            assert_eq!(
                fs::metadata(&artifact.path).unwrap().len() as usize,
                artifact.bytes
            );
        }
        let colors = fs::read_to_string(config.dest_path(Dataset::ElementColors)).unwrap();
        assert!(colors.contains("pub const ELEMENT_COLORS_JSON"));
    }

    #[test]
    fn generate_overwrites_existing_modules() {
        let (_tmp, config) = setup();
        let path = config.dest_path(Dataset::PeriodicTable);
        fs::write(&path, "stale").unwrap();
        generate(&config).unwrap();
        assert_ne!(fs::read_to_string(&path).unwrap(), "stale");
    }

    #[test]
    fn generate_is_byte_identical_across_runs() {
        let (_tmp, config) = setup();
        generate(&config).unwrap();
        let first: Vec<String> = Dataset::ALL
            .iter()
            .map(|d| fs::read_to_string(config.dest_path(*d)).unwrap())
            .collect();
        generate(&config).unwrap();
        let second: Vec<String> = Dataset::ALL
            .iter()
            .map(|d| fs::read_to_string(config.dest_path(*d)).unwrap())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn errors_on_missing_source() {
        let (_tmp, config) = setup();
        fs::remove_file(config.source_path(Dataset::ElementColors)).unwrap();
        let err = generate(&config).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(err.path(), config.source_path(Dataset::ElementColors));
    }

    #[test]
    fn errors_on_malformed_source() {
        let (_tmp, config) = setup();
        fs::write(config.source_path(Dataset::PeriodicTable), "{not json").unwrap();
        let err = generate(&config).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn errors_on_missing_destination() {
        let (tmp, mut config) = setup();
        config.dest_dir = tmp.path().join("does-not-exist");
        let err = generate(&config).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(err.path(), config.dest_path(Dataset::ALL[0]));
    }

    #[test]
    fn failed_write_keeps_earlier_modules() {
        let (_tmp, config) = setup();
        let last = Dataset::ALL[2];
        fs::create_dir_all(config.dest_path(last)).unwrap();

        let err = generate(&config).unwrap_err();
        assert_eq!(err.path(), config.dest_path(last));
        assert!(config.dest_path(Dataset::ALL[0]).is_file());
        assert!(config.dest_path(Dataset::ALL[1]).is_file());
    }

    #[test]
    fn check_reports_missing_stale_and_up_to_date() {
        let (_tmp, config) = setup();
        assert!(
            check(&config)
                .unwrap()
                .iter()
                .all(|c| c.status == ArtifactStatus::Missing)
        );

        generate(&config).unwrap();
        assert!(
            check(&config)
                .unwrap()
                .iter()
                .all(|c| c.status == ArtifactStatus::UpToDate)
        );

        fs::write(
            config.source_path(Dataset::ElementColors),
            r##"{"H": "#EEEEEE"}"##,
        )
        .unwrap();
        let checks = check(&config).unwrap();
        let colors = checks
            .iter()
            .find(|c| c.dataset == Dataset::ElementColors)
            .unwrap();
        assert_eq!(colors.status, ArtifactStatus::Stale);
    }
}
