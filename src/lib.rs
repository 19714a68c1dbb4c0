//! Reference data for chemistry applications: the periodic table of elements,
//! inter-element bond energies and lengths, and element display colors.
//!
//! The data is kept in three JSON files at the crate root and reaches Rust
//! code in one of two ways:
//!
//! - **Embedded**: `build.rs` renders each file into a generated module that
//!   is compiled into the library. [`PERIODIC_TABLE`], [`ELEMENT_BONDS`] and
//!   [`ELEMENT_COLORS`] parse it on first access and never touch the
//!   filesystem.
//! - **Loaded**: [`loader`] reads the files at runtime from an explicit
//!   [`DataSource`], either once for the whole process ([`loader::init`]) or
//!   on demand ([`Datasets::load`]).
//!
//! The [`codegen`] module exposes the same rendering used by `build.rs`, so
//! the generated modules can also be written to any directory (see the
//! `ptgen` binary).
//!
//! # Quick Start
//!
//! ```
//! use periodic_table::{ELEMENT_BONDS, ELEMENT_COLORS, PERIODIC_TABLE};
//!
//! assert_eq!(PERIODIC_TABLE["H"].name(), Some("Hydrogen"));
//! assert_eq!(PERIODIC_TABLE["H"]["atomic_radius_pm"], 25);
//! assert_eq!(&ELEMENT_COLORS["H"], "#FFFFFF");
//!
//! // Stored element order matters for `find`.
//! let oh = ELEMENT_BONDS.find("H", "O").unwrap();
//! assert_eq!(oh.energy.value, 4.75721615);
//! assert_eq!(oh.length.units, "angstrom");
//! assert!(ELEMENT_BONDS.find("O", "H").is_none());
//!
//! // `filter` matches a pair in either order.
//! assert_eq!(ELEMENT_BONDS.filter("O", "H", None).len(), 1);
//! ```
//!
//! # Unit-aware element access
//!
//! ```
//! use periodic_table::{ChemicalElement, ELEMENT_COLORS, PERIODIC_TABLE};
//! use periodic_table::units::LengthUnit;
//!
//! let iodine = ChemicalElement::new(&PERIODIC_TABLE, &ELEMENT_COLORS, "i")?;
//! assert_eq!(iodine.symbol(), "I");
//! let radius = iodine.atomic_radius_in(LengthUnit::Bohr).unwrap();
//! assert!((radius - 2.64562).abs() < 1e-3);
//! # Ok::<(), periodic_table::InvalidSymbolError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`codegen`] - Generation of modules embedding the datasets
//! - [`loader`] - Runtime loading from a base directory
//! - [`units`] - Length, energy and mass units and conversions
//! - [`Dataset`] - Names and file names of the three datasets

extern crate self as periodic_table;

mod dataset;
mod element;
mod embedded;
mod model;

pub mod codegen;
pub mod loader;
pub mod units;

pub use dataset::Dataset;
pub use element::{ChemicalElement, InvalidSymbolError};
pub use embedded::{ELEMENT_BONDS, ELEMENT_COLORS, PERIODIC_TABLE, source as embedded_source};
pub use loader::{DataSource, Datasets};

pub use model::bonds::{BondData, BondRecord, DefaultBond, ElementBonds, Quantity};
pub use model::colors::ElementColors;
pub use model::table::{ElementProperties, PeriodicTable};

pub use codegen::Error as GenerateError;
pub use loader::Error as LoadError;
