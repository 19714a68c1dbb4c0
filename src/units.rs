//! Units of the stored quantities and conversions between them.
//!
//! Conversion coefficients follow CODATA-derived values (Hartree atomic
//! units). Each quantity has a small conversion tree `from -> to -> factor`;
//! a missing direct factor is tried in reverse by division.

use log::warn;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Angstrom,
    Bohr,
    Picometer,
    Nanometer,
    Micrometer,
    Millimeter,
    Meter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnergyUnit {
    Hartree,
    Electronvolt,
    KjPerMol,
    KcalPerMol,
    Wavenumber,
    Joule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MassUnit {
    Kilogram,
    Dalton,
    AtomicMassUnit,
}

/// A unit that can be converted within its own quantity.
pub trait Unit: Copy + PartialEq + fmt::Display {
    /// Direct conversion factor `from -> to`, if tabulated.
    fn factor(from: Self, to: Self) -> Option<f64>;
}

impl LengthUnit {
    pub fn label(&self) -> &'static str {
        match self {
            LengthUnit::Angstrom => "ang",
            LengthUnit::Bohr => "bohr",
            LengthUnit::Picometer => "pm",
            LengthUnit::Nanometer => "nm",
            LengthUnit::Micrometer => "µm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Meter => "m",
        }
    }
}

impl EnergyUnit {
    pub fn label(&self) -> &'static str {
        match self {
            EnergyUnit::Hartree => "hartree",
            EnergyUnit::Electronvolt => "eV",
            EnergyUnit::KjPerMol => "kJ/mol",
            EnergyUnit::KcalPerMol => "kcal/mol",
            EnergyUnit::Wavenumber => "cm-1",
            EnergyUnit::Joule => "J",
        }
    }
}

impl MassUnit {
    pub fn label(&self) -> &'static str {
        match self {
            MassUnit::Kilogram => "kg",
            MassUnit::Dalton => "Da",
            MassUnit::AtomicMassUnit => "amu",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Unit for LengthUnit {
    fn factor(from: Self, to: Self) -> Option<f64> {
        use LengthUnit::*;
        match (from, to) {
            (Angstrom, Picometer) => Some(100.0),
            (Bohr, Picometer) => Some(52.9177210903),
            (Bohr, Angstrom) => Some(0.529177210903),
            _ => None,
        }
    }
}

impl Unit for EnergyUnit {
    fn factor(from: Self, to: Self) -> Option<f64> {
        use EnergyUnit::*;
        match (from, to) {
            (Hartree, Electronvolt) => Some(27.211386245988),
            (Hartree, KjPerMol) => Some(2625.4996394799),
            (Hartree, KcalPerMol) => Some(627.5094740631),
            (Hartree, Joule) => Some(4.3597447222071e-18),
            (Hartree, Wavenumber) => Some(219474.6313632),
            (Electronvolt, KjPerMol) => Some(96.48533212331287),
            (Electronvolt, KcalPerMol) => Some(23.06054783062068),
            (Electronvolt, Joule) => Some(1.602176634e-19),
            _ => None,
        }
    }
}

impl Unit for MassUnit {
    fn factor(from: Self, to: Self) -> Option<f64> {
        use MassUnit::*;
        match (from, to) {
            (AtomicMassUnit, Kilogram) => Some(1.660539066e-27),
            (AtomicMassUnit, Dalton) => Some(1.0),
            _ => None,
        }
    }
}

/// Converts `value` from one unit to another of the same quantity.
///
/// Returns `None` if neither `from -> to` nor `to -> from` is tabulated.
pub fn convert<U: Unit>(value: f64, from: U, to: U) -> Option<f64> {
    if from == to {
        return Some(value);
    }
    if let Some(factor) = U::factor(from, to) {
        return Some(value * factor);
    }
    if let Some(factor) = U::factor(to, from) {
        return Some(value / factor);
    }
    warn!("no conversion factor from {from} to {to} (value {value})");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn identity_conversion() {
        assert_eq!(convert(3.5, EnergyUnit::Joule, EnergyUnit::Joule), Some(3.5));
    }

    #[test]
    fn direct_conversion() {
        let ev = convert(1.0, EnergyUnit::Hartree, EnergyUnit::Electronvolt).unwrap();
        assert!(approx_eq(ev, 27.211386245988, 1e-12));
    }

    #[test]
    fn reverse_conversion() {
        let bohr = convert(145.0, LengthUnit::Picometer, LengthUnit::Bohr).unwrap();
        assert!(approx_eq(bohr, 2.7401, 1e-3));
    }

    #[test]
    fn untabulated_conversion_is_none() {
        assert_eq!(convert(1.0, EnergyUnit::KjPerMol, EnergyUnit::Joule), None);
        assert_eq!(convert(1.0, LengthUnit::Meter, LengthUnit::Angstrom), None);
    }

    #[test]
    fn mass_conversion() {
        let kg = convert(6.94, MassUnit::AtomicMassUnit, MassUnit::Kilogram).unwrap();
        assert!(approx_eq(kg, 1.153e-26, 1e-27));
        assert_eq!(convert(12.0, MassUnit::Dalton, MassUnit::AtomicMassUnit), Some(12.0));
    }

    #[test]
    fn labels() {
        assert_eq!(LengthUnit::Angstrom.to_string(), "ang");
        assert_eq!(EnergyUnit::KcalPerMol.to_string(), "kcal/mol");
        assert_eq!(MassUnit::AtomicMassUnit.to_string(), "amu");
    }
}
