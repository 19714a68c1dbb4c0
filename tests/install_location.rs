//! Kept in its own test binary: changing the working directory is process-wide.

use std::env;

use periodic_table::loader::Strategy;
use periodic_table::{DataSource, Datasets};
use tempfile::TempDir;

#[test]
fn install_location_ignores_the_working_directory() {
    let elsewhere = TempDir::new().unwrap();
    env::set_current_dir(elsewhere.path()).unwrap();

    let cwd = DataSource::working_directory().unwrap();
    assert_eq!(cwd.strategy(), Strategy::WorkingDirectory);
    let err = Datasets::load(&cwd).unwrap_err();
    assert!(err.is_not_found());

    let installed = DataSource::install_location();
    assert_eq!(installed.strategy(), Strategy::InstallLocation);
    let datasets = Datasets::load(&installed).unwrap();
    assert_eq!(datasets.periodic_table["H"].name(), Some("Hydrogen"));
}
