use super::table::PeriodicTable;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A measured value with its unit label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub units: String,
}

impl Quantity {
    pub fn new(value: f64, units: impl Into<String>) -> Self {
        Self {
            value,
            units: units.into(),
        }
    }
}

/// A chemical bond between two elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondRecord {
    /// Element symbols in stored order.
    pub elements: [String; 2],
    pub energy: Quantity,
    pub length: Quantity,
    pub order: u8,
}

impl BondRecord {
    /// Whether the record joins `a` and `b` in exactly this order.
    pub fn is_ordered_pair(&self, a: &str, b: &str) -> bool {
        self.elements[0] == a && self.elements[1] == b
    }

    /// Whether the record joins `a` and `b` in either order.
    pub fn is_pair(&self, a: &str, b: &str) -> bool {
        self.is_ordered_pair(a, b) || self.is_ordered_pair(b, a)
    }
}

/// A bond estimated when no measured record exists.
///
/// Its length is the sum of the covalent radii, when both are known, and its
/// energy is unknown.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultBond {
    pub elements: [String; 2],
    pub length_angstrom: Option<f64>,
    pub order: Option<u8>,
}

impl DefaultBond {
    pub const ENERGY_UNITS: &'static str = "eV";
    pub const LENGTH_UNITS: &'static str = "angstrom";

    pub fn estimate(table: &PeriodicTable, a: &str, b: &str, order: Option<u8>) -> Self {
        let radius = |symbol: &str| {
            table
                .get(symbol)
                .and_then(|e| e.covalent_radius_pm())
                .map(|pm| pm / 100.0)
        };
        let length_angstrom = match (radius(a), radius(b)) {
            (Some(ra), Some(rb)) => Some(ra + rb),
            _ => None,
        };
        Self {
            elements: [a.to_string(), b.to_string()],
            length_angstrom,
            order,
        }
    }
}

/// Bond data for a pair of elements: measured records or a single estimate.
#[derive(Debug, Clone, PartialEq)]
pub enum BondData<'a> {
    Measured(Vec<&'a BondRecord>),
    Estimated(DefaultBond),
}

impl BondData<'_> {
    pub fn len(&self) -> usize {
        match self {
            BondData::Measured(records) => records.len(),
            BondData::Estimated(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// All bond records, in stored order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementBonds(Vec<BondRecord>);

impl ElementBonds {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BondRecord> {
        self.0.iter()
    }

    /// First record whose `elements` are exactly `[a, b]`.
    ///
    /// Stored order is significant: `find("H", "O")` and `find("O", "H")`
    /// are different lookups. Use [`filter`](Self::filter) to match a pair
    /// regardless of order.
    pub fn find(&self, a: &str, b: &str) -> Option<&BondRecord> {
        self.0.iter().find(|r| r.is_ordered_pair(a, b))
    }

    /// Records joining `a` and `b` in either order, optionally restricted to a bond order.
    pub fn filter(&self, a: &str, b: &str, order: Option<u8>) -> Vec<&BondRecord> {
        self.0
            .iter()
            .filter(|r| r.is_pair(a, b) && order.is_none_or(|o| r.order == o))
            .collect()
    }

    /// Highest bond order recorded between `a` and `b`.
    pub fn max_order(&self, a: &str, b: &str) -> Option<u8> {
        self.filter(a, b, None).iter().map(|r| r.order).max()
    }

    /// Measured records for the pair, or an estimate from covalent radii.
    pub fn for_elements<'a>(
        &'a self,
        table: &PeriodicTable,
        a: &str,
        b: &str,
        order: Option<u8>,
    ) -> BondData<'a> {
        let measured = self.filter(a, b, order);
        if measured.is_empty() {
            BondData::Estimated(DefaultBond::estimate(table, a, b, order))
        } else {
            BondData::Measured(measured)
        }
    }
}

impl Index<usize> for ElementBonds {
    type Output = BondRecord;

    fn index(&self, index: usize) -> &BondRecord {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a ElementBonds {
    type Item = &'a BondRecord;
    type IntoIter = std::slice::Iter<'a, BondRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bond(a: &str, b: &str, energy: f64, length: f64, order: u8) -> serde_json::Value {
        json!({
            "elements": [a, b],
            "energy": {"value": energy, "units": "eV"},
            "length": {"value": length, "units": "angstrom"},
            "order": order
        })
    }

    fn sample() -> ElementBonds {
        serde_json::from_value(json!([
            bond("H", "O", 4.75721615, 0.96, 1),
            bond("H", "C", 4.25972949, 1.09, 1),
            bond("C", "C", 3.58605999, 1.54, 1),
            bond("C", "C", 6.23931181, 1.34, 2),
            bond("C", "C", 8.65419495, 1.2, 3),
        ]))
        .unwrap()
    }

    fn table() -> PeriodicTable {
        serde_json::from_value(json!({
            "H": {"name": "Hydrogen", "covalent_radius_pm": 31},
            "N": {"name": "Nitrogen", "covalent_radius_pm": 71},
            "Lr": {"name": "Lawrencium", "covalent_radius_pm": "no data"}
        }))
        .unwrap()
    }

    #[test]
    fn find_respects_stored_order() {
        let bonds = sample();
        let ho = bonds.find("H", "O").unwrap();
        assert_eq!(ho.energy, Quantity::new(4.75721615, "eV"));
        assert_eq!(ho.length, Quantity::new(0.96, "angstrom"));
        assert!(bonds.find("O", "H").is_none());
    }

    #[test]
    fn filter_matches_either_order() {
        let bonds = sample();
        assert_eq!(bonds.filter("C", "H", None).len(), 1);
        assert_eq!(bonds.filter("H", "C", None).len(), 1);
    }

    #[test]
    fn filter_by_order() {
        let bonds = sample();
        assert_eq!(bonds.filter("C", "C", None).len(), 3);
        let triple = bonds.filter("C", "C", Some(3));
        assert_eq!(triple.len(), 1);
        assert_eq!(triple[0].order, 3);
        assert_eq!(bonds.max_order("C", "C"), Some(3));
        assert_eq!(bonds.max_order("N", "N"), None);
    }

    #[test]
    fn for_elements_falls_back_to_covalent_estimate() {
        let bonds = sample();
        let table = table();
        match bonds.for_elements(&table, "N", "H", None) {
            BondData::Estimated(default) => {
                assert_eq!(default.elements, ["N".to_string(), "H".to_string()]);
                let length = default.length_angstrom.unwrap();
                assert!((length - 1.02).abs() < 1e-12);
                assert_eq!(default.order, None);
            }
            other => panic!("expected estimate, got {other:?}"),
        }
    }

    #[test]
    fn estimate_without_radius_has_no_length() {
        let estimate = DefaultBond::estimate(&table(), "Lr", "Lr", Some(1));
        assert_eq!(estimate.length_angstrom, None);
        assert_eq!(estimate.order, Some(1));
    }

    #[test]
    fn for_elements_prefers_measured_records() {
        let bonds = sample();
        let data = bonds.for_elements(&table(), "C", "C", None);
        assert!(matches!(data, BondData::Measured(_)));
        assert_eq!(data.len(), 3);
    }

    #[test]
    fn serializes_back_to_source_value() {
        let source = json!([bond("H", "O", 4.75721615, 0.96, 1)]);
        let bonds: ElementBonds = serde_json::from_value(source.clone()).unwrap();
        assert_eq!(serde_json::to_value(&bonds).unwrap(), source);
    }
}
