use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Index;

/// Display colors keyed by element symbol, as `#RRGGBB` strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementColors(BTreeMap<String, String>);

impl ElementColors {
    /// Color used for symbols without an entry.
    pub const DEFAULT_COLOR: &'static str = "#999";

    pub fn get(&self, symbol: &str) -> Option<&str> {
        self.0.get(symbol).map(String::as_str)
    }

    pub fn color_or_default(&self, symbol: &str) -> &str {
        self.get(symbol).unwrap_or(Self::DEFAULT_COLOR)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Index<&str> for ElementColors {
    type Output = str;

    fn index(&self, symbol: &str) -> &str {
        &self.0[symbol]
    }
}
