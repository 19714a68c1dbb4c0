use anyhow::{Context, Result};

use periodic_table::codegen::GeneratorConfig;
use periodic_table::{DataSource, Datasets, ELEMENT_BONDS, ELEMENT_COLORS, PERIODIC_TABLE, loader};

use crate::cli::{DataOptions, PathOptions};

pub fn build_generator_config(paths: &PathOptions) -> GeneratorConfig {
    GeneratorConfig::new(&paths.source, &paths.dest)
}

/// Data used by lookup commands.
pub enum LookupData {
    Embedded,
    Loaded(&'static Datasets),
}

impl LookupData {
    pub fn table(&self) -> &periodic_table::PeriodicTable {
        match self {
            LookupData::Embedded => &*PERIODIC_TABLE,
            LookupData::Loaded(d) => &d.periodic_table,
        }
    }

    pub fn bonds(&self) -> &periodic_table::ElementBonds {
        match self {
            LookupData::Embedded => &*ELEMENT_BONDS,
            LookupData::Loaded(d) => &d.element_bonds,
        }
    }

    pub fn colors(&self) -> &periodic_table::ElementColors {
        match self {
            LookupData::Embedded => &*ELEMENT_COLORS,
            LookupData::Loaded(d) => &d.element_colors,
        }
    }
}

pub fn resolve_lookup_data(options: &DataOptions) -> Result<LookupData> {
    match &options.data {
        None => Ok(LookupData::Embedded),
        Some(dir) => {
            let source = DataSource::new(dir);
            let datasets = loader::init(&source)
                .with_context(|| format!("Failed to load datasets from '{}'", dir.display()))?;
            Ok(LookupData::Loaded(datasets))
        }
    }
}
