//! Datasets compiled into the library.
//!
//! `build.rs` renders the JSON files at the crate root into `OUT_DIR`. Each
//! module declares the JSON text and the static it parses into on first
//! access, and is included here unchanged. No file is read at
//! runtime, so these values work from any working directory or install.

use crate::dataset::Dataset;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/periodic_table.rs"));
    include!(concat!(env!("OUT_DIR"), "/element_bonds.rs"));
    include!(concat!(env!("OUT_DIR"), "/element_colors.rs"));
}

pub use generated::{ELEMENT_BONDS, ELEMENT_COLORS, PERIODIC_TABLE};

/// Canonical JSON text embedded for `dataset`.
pub fn source(dataset: Dataset) -> &'static str {
    match dataset {
        Dataset::PeriodicTable => generated::PERIODIC_TABLE_JSON,
        Dataset::ElementBonds => generated::ELEMENT_BONDS_JSON,
        Dataset::ElementColors => generated::ELEMENT_COLORS_JSON,
    }
}
