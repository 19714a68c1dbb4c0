use std::fmt;

/// One of the three reference datasets shipped with the crate.
///
/// Each dataset has a fixed source file name at the project root, a fixed
/// exported binding name and a fixed generated module file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dataset {
    PeriodicTable,
    ElementBonds,
    ElementColors,
}

impl Dataset {
    /// All datasets, in generation order.
    pub const ALL: [Dataset; 3] = [
        Dataset::ElementBonds,
        Dataset::ElementColors,
        Dataset::PeriodicTable,
    ];

    /// File name of the canonical JSON source.
    pub fn file_name(&self) -> &'static str {
        match self {
            Dataset::PeriodicTable => "periodic-table.json",
            Dataset::ElementBonds => "element-bonds.json",
            Dataset::ElementColors => "element-colors.json",
        }
    }

    /// Exported name the dataset is bound to.
    pub fn binding(&self) -> &'static str {
        match self {
            Dataset::PeriodicTable => "PERIODIC_TABLE",
            Dataset::ElementBonds => "ELEMENT_BONDS",
            Dataset::ElementColors => "ELEMENT_COLORS",
        }
    }

    /// Name of the typed value the dataset parses into, as exported by this crate.
    pub fn type_name(&self) -> &'static str {
        match self {
            Dataset::PeriodicTable => "PeriodicTable",
            Dataset::ElementBonds => "ElementBonds",
            Dataset::ElementColors => "ElementColors",
        }
    }

    /// Name of the string constant holding the embedded JSON text.
    pub fn const_name(&self) -> &'static str {
        match self {
            Dataset::PeriodicTable => "PERIODIC_TABLE_JSON",
            Dataset::ElementBonds => "ELEMENT_BONDS_JSON",
            Dataset::ElementColors => "ELEMENT_COLORS_JSON",
        }
    }

    /// File name of the generated Rust module.
    pub fn module_file_name(&self) -> &'static str {
        match self {
            Dataset::PeriodicTable => "periodic_table.rs",
            Dataset::ElementBonds => "element_bonds.rs",
            Dataset::ElementColors => "element_colors.rs",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_distinct_per_dataset() {
        let files: HashSet<_> = Dataset::ALL.iter().map(|d| d.file_name()).collect();
        let bindings: HashSet<_> = Dataset::ALL.iter().map(|d| d.binding()).collect();
        let modules: HashSet<_> = Dataset::ALL.iter().map(|d| d.module_file_name()).collect();
        assert_eq!(files.len(), 3);
        assert_eq!(bindings.len(), 3);
        assert_eq!(modules.len(), 3);
    }

    #[test]
    fn const_name_derives_from_binding() {
        for dataset in Dataset::ALL {
            assert_eq!(dataset.const_name(), format!("{}_JSON", dataset.binding()));
        }
    }

    #[test]
    fn display_uses_file_name() {
        assert_eq!(Dataset::ElementBonds.to_string(), "element-bonds.json");
    }
}
