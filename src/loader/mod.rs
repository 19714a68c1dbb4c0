//! Runtime loading of the datasets from JSON files on disk.
//!
//! [`Datasets::load`] reads the three files from a [`DataSource`] every time
//! it is called. [`init`] binds one loaded copy for the rest of the process;
//! the first successful call wins and later calls get the same value.

mod error;
mod source;

pub use error::Error;
pub use source::{DataSource, Strategy};

use crate::dataset::Dataset;
use crate::model::bonds::ElementBonds;
use crate::model::colors::ElementColors;
use crate::model::table::PeriodicTable;
use log::{debug, info};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

static LOADED: OnceCell<Datasets> = OnceCell::new();

/// The three datasets read from one [`DataSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct Datasets {
    pub periodic_table: PeriodicTable,
    pub element_bonds: ElementBonds,
    pub element_colors: ElementColors,
}

impl Datasets {
    pub fn load(source: &DataSource) -> Result<Self, Error> {
        let datasets = Self {
            element_bonds: read_dataset(&source.path(Dataset::ElementBonds))?,
            element_colors: read_dataset(&source.path(Dataset::ElementColors))?,
            periodic_table: read_dataset(&source.path(Dataset::PeriodicTable))?,
        };
        info!(
            "loaded {} elements, {} bonds, {} colors from {}",
            datasets.periodic_table.len(),
            datasets.element_bonds.len(),
            datasets.element_colors.len(),
            source.base_dir().display()
        );
        Ok(datasets)
    }
}

/// Loads the datasets once for the whole process.
///
/// If they are already loaded, `source` is ignored and the existing value is
/// returned. A failed load leaves nothing bound, so a later call may retry
/// with a corrected source.
pub fn init(source: &DataSource) -> Result<&'static Datasets, Error> {
    if let Some(loaded) = LOADED.get() {
        debug!(
            "datasets already loaded; ignoring source {}",
            source.base_dir().display()
        );
        return Ok(loaded);
    }
    LOADED.get_or_try_init(|| Datasets::load(source))
}

/// The process-wide datasets, if [`init`] has succeeded.
pub fn get() -> Option<&'static Datasets> {
    LOADED.get()
}

fn read_dataset<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    debug!("reading {}", path.display());
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| Error::json(path, e))
}
