use crate::model::colors::ElementColors;
use crate::model::table::{ElementProperties, PeriodicTable};
use crate::units::{EnergyUnit, LengthUnit, MassUnit, Unit, convert};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid element symbol: '{0}'")]
pub struct InvalidSymbolError(String);

/// A view of one element's record with unit-aware accessors.
///
/// Numeric accessors return `None` when the stored field is not a number.
#[derive(Debug, Clone, Copy)]
pub struct ChemicalElement<'a> {
    symbol: &'a str,
    properties: &'a ElementProperties,
    colors: &'a ElementColors,
}

impl<'a> ChemicalElement<'a> {
    /// Looks up `symbol`, matching case-insensitively (`"li"` resolves to `Li`).
    pub fn new(
        table: &'a PeriodicTable,
        colors: &'a ElementColors,
        symbol: &str,
    ) -> Result<Self, InvalidSymbolError> {
        let symbol = table
            .normalize_symbol(symbol)
            .ok_or_else(|| InvalidSymbolError(symbol.to_string()))?;
        Ok(Self {
            symbol,
            properties: &table[symbol],
            colors,
        })
    }

    pub fn symbol(&self) -> &'a str {
        self.symbol
    }

    pub fn name(&self) -> Option<&'a str> {
        self.properties.name()
    }

    pub fn properties(&self) -> &'a ElementProperties {
        self.properties
    }

    /// Display color, falling back to [`ElementColors::DEFAULT_COLOR`].
    pub fn color(&self) -> &'a str {
        self.colors.color_or_default(self.symbol)
    }

    /// Atomic mass in amu.
    pub fn mass(&self) -> Option<f64> {
        self.properties.atomic_mass()
    }

    pub fn mass_in(&self, unit: MassUnit) -> Option<f64> {
        in_units(self.mass(), MassUnit::AtomicMassUnit, unit)
    }

    /// Empirical atomic radius in pm.
    pub fn atomic_radius(&self) -> Option<f64> {
        self.properties.atomic_radius_pm()
    }

    pub fn atomic_radius_in(&self, unit: LengthUnit) -> Option<f64> {
        in_units(self.atomic_radius(), LengthUnit::Picometer, unit)
    }

    /// Van der Waals radius in pm.
    pub fn van_der_waals_radius(&self) -> Option<f64> {
        self.properties.van_der_waals_radius_pm()
    }

    pub fn van_der_waals_radius_in(&self, unit: LengthUnit) -> Option<f64> {
        in_units(self.van_der_waals_radius(), LengthUnit::Picometer, unit)
    }

    /// First ionization potential in eV.
    pub fn ionization_potential(&self) -> Option<f64> {
        let kj_mol = self.properties.first_ionization_kj_mol()?;
        let per_ev = EnergyUnit::factor(EnergyUnit::Electronvolt, EnergyUnit::KjPerMol)?;
        Some(kj_mol / per_ev)
    }

    pub fn ionization_potential_in(&self, unit: EnergyUnit) -> Option<f64> {
        in_units(self.ionization_potential(), EnergyUnit::Electronvolt, unit)
    }
}

impl fmt::Display for ChemicalElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol)
    }
}

fn in_units<U: Unit>(value: Option<f64>, from: U, to: U) -> Option<f64> {
    value.and_then(|v| convert(v, from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data() -> (PeriodicTable, ElementColors) {
        let table = serde_json::from_value(json!({
            "Li": {
                "symbol": "Li", "name": "Lithium", "atomic_mass": 6.94,
                "atomic_radius_pm": 145, "van_der_Waals_radius_pm": 182,
                "first_ionizing_kJ_mol": 520.2
            },
            "Lr": {
                "symbol": "Lr", "name": "Lawrencium", "atomic_mass": 262,
                "atomic_radius_pm": "no data", "van_der_Waals_radius_pm": "no data",
                "first_ionizing_kJ_mol": "no data"
            }
        }))
        .unwrap();
        let colors = serde_json::from_value(json!({"Li": "#CC80FF"})).unwrap();
        (table, colors)
    }

    #[test]
    fn symbol_is_normalized() {
        let (table, colors) = data();
        let li = ChemicalElement::new(&table, &colors, "li").unwrap();
        assert_eq!(li.symbol(), "Li");
        assert_eq!(li.name(), Some("Lithium"));
        assert_eq!(li.color(), "#CC80FF");
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let (table, colors) = data();
        let err = ChemicalElement::new(&table, &colors, "Xx").unwrap_err();
        assert_eq!(err.to_string(), "invalid element symbol: 'Xx'");
    }

    #[test]
    fn converts_units() {
        let (table, colors) = data();
        let li = ChemicalElement::new(&table, &colors, "Li").unwrap();
        assert!((li.mass_in(MassUnit::Kilogram).unwrap() - 1.153e-26).abs() < 1e-27);
        assert!((li.atomic_radius_in(LengthUnit::Bohr).unwrap() - 2.7401).abs() < 1e-3);
        assert!((li.van_der_waals_radius_in(LengthUnit::Angstrom).unwrap() - 1.82).abs() < 1e-2);
        assert!((li.ionization_potential_in(EnergyUnit::Hartree).unwrap() - 0.19802).abs() < 1e-3);
    }

    #[test]
    fn missing_values_stay_missing_across_units() {
        let (table, colors) = data();
        let lr = ChemicalElement::new(&table, &colors, "Lr").unwrap();
        assert_eq!(lr.mass(), Some(262.0));
        assert_eq!(lr.atomic_radius(), None);
        assert_eq!(lr.atomic_radius_in(LengthUnit::Bohr), None);
        assert_eq!(lr.ionization_potential_in(EnergyUnit::Hartree), None);
        assert_eq!(lr.color(), "#999");
    }
}
