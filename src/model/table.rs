use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::ops::Index;

/// Properties of a single element, kept exactly as stored.
///
/// Fields beyond `name` and `symbol` are not fixed: numeric fields may hold a
/// placeholder string (e.g. `"no data"`) or `null` for elements where the
/// quantity is unknown, so typed accessors return `None` for anything that is
/// not a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementProperties(Map<String, Value>);

impl ElementProperties {
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.0.get(property)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.0.contains_key(property)
    }

    /// Value of `property` if it is a JSON number.
    pub fn number(&self, property: &str) -> Option<f64> {
        self.0.get(property).and_then(Value::as_f64)
    }

    /// Value of `property` if it is a JSON string.
    pub fn text(&self, property: &str) -> Option<&str> {
        self.0.get(property).and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.text("name")
    }

    pub fn symbol(&self) -> Option<&str> {
        self.text("symbol")
    }

    pub fn atomic_number(&self) -> Option<u64> {
        self.0.get("atomic_number").and_then(Value::as_u64)
    }

    /// Atomic mass in amu.
    pub fn atomic_mass(&self) -> Option<f64> {
        self.number("atomic_mass")
    }

    /// Empirical atomic radius in pm.
    pub fn atomic_radius_pm(&self) -> Option<f64> {
        self.number("atomic_radius_pm")
    }

    pub fn van_der_waals_radius_pm(&self) -> Option<f64> {
        self.number("van_der_Waals_radius_pm")
    }

    pub fn covalent_radius_pm(&self) -> Option<f64> {
        self.number("covalent_radius_pm")
    }

    pub fn pauling_negativity(&self) -> Option<f64> {
        self.number("pauling_negativity")
    }

    /// First ionization energy in kJ/mol.
    pub fn first_ionization_kj_mol(&self) -> Option<f64> {
        self.number("first_ionizing_kJ_mol")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl Index<&str> for ElementProperties {
    type Output = Value;

    fn index(&self, property: &str) -> &Value {
        &self.0[property]
    }
}

/// The periodic table, keyed by element symbol.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodicTable(BTreeMap<String, ElementProperties>);

impl PeriodicTable {
    pub fn get(&self, symbol: &str) -> Option<&ElementProperties> {
        self.0.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.0.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Elements in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ElementProperties)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Canonical symbol for a case-insensitive match of `symbol`.
    ///
    /// `"li"`, `"LI"` and `"Li"` all normalize to `"Li"`.
    pub fn normalize_symbol(&self, symbol: &str) -> Option<&str> {
        if let Some((key, _)) = self.0.get_key_value(symbol) {
            return Some(key.as_str());
        }
        self.0
            .keys()
            .find(|key| key.eq_ignore_ascii_case(symbol))
            .map(String::as_str)
    }

    /// Whether any element has exactly this name.
    pub fn is_valid_name(&self, name: &str) -> bool {
        self.0.values().any(|e| e.name() == Some(name))
    }

    /// Whether `property` is a field of the hydrogen record.
    pub fn is_valid_property(&self, property: &str) -> bool {
        self.get("H").is_some_and(|h| h.contains(property))
    }

    /// Pauling electronegativity, or `None` if unknown.
    pub fn electronegativity(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).and_then(ElementProperties::pauling_negativity)
    }

    /// Atomic radius in angstrom.
    ///
    /// Unknown symbols yield 1.0 Å. Known elements without a numeric
    /// radius yield `None`.
    pub fn atomic_radius_angstrom(&self, symbol: &str) -> Option<f64> {
        match self.get(symbol) {
            Some(element) => element.atomic_radius_pm().map(|pm| pm / 100.0),
            None => Some(1.0),
        }
    }

    /// Flattens selected properties into `"<property><separator><symbol>"` entries.
    ///
    /// Unknown symbols and properties are skipped, as are `null`, empty
    /// string and array values. Entries are grouped by property, in the
    /// order given, and by element within each property. `property_map`
    /// renames properties in the resulting keys.
    pub fn atomic_properties_flat(
        &self,
        elements: &[&str],
        properties: &[&str],
        property_map: Option<&BTreeMap<String, String>>,
        separator: &str,
    ) -> Vec<(String, Value)> {
        let elements: Vec<&str> = elements
            .iter()
            .filter_map(|e| self.normalize_symbol(e))
            .collect();

        let mut flat = Vec::new();
        for property in properties.iter().filter(|p| self.is_valid_property(p)) {
            let label = property_map
                .and_then(|m| m.get(*property))
                .map(String::as_str)
                .unwrap_or(*property);

            for symbol in &elements {
                let Some(value) = self.get(symbol).and_then(|e| e.get(property)) else {
                    continue;
                };
                let skip = match value {
                    Value::Null | Value::Array(_) => true,
                    Value::String(s) => s.is_empty(),
                    _ => false,
                };
                if !skip {
                    flat.push((format!("{label}{separator}{symbol}"), value.clone()));
                }
            }
        }
        flat
    }
}

impl Index<&str> for PeriodicTable {
    type Output = ElementProperties;

    fn index(&self, symbol: &str) -> &ElementProperties {
        &self.0[symbol]
    }
}
