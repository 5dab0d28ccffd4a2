//! The system catalog: lookup from a system identifier to its shape.
//!
//! The catalog is loaded once from static configuration. A built-in table
//! covers the standard full (`M-…`) and reduced (`R-…`) systems for the
//! 13-match pools and the compact 8-match pool (`T-…`); operators can load
//! replacements or additions from JSON.

use crate::shape::SystemShape;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Whether a system plays the full hedge space or a reduced subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemKind {
    /// Every row of the hedge space is played.
    Full,
    /// A covering-code subset of the hedge space is played.
    Reduced,
}

/// A named betting system: its shape plus its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemDefinition {
    /// Catalog identifier, e.g. `R-3-2-36`.
    pub id: String,
    #[serde(flatten)]
    pub shape: SystemShape,
    pub kind: SystemKind,
}

impl SystemDefinition {
    fn new(id: &str, shape: SystemShape, kind: SystemKind) -> Self {
        Self {
            id: id.to_string(),
            shape,
            kind,
        }
    }
}

/// Lookup table from system identifier to definition.
#[derive(Debug, Clone, Default)]
pub struct SystemCatalog {
    systems: HashMap<String, SystemDefinition>,
}

impl SystemCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog of standard systems.
    ///
    /// Full systems carry a row budget equal to their space size and a
    /// guarantee of every match; reduced systems trade rows for a lower
    /// guarantee. `T-…` systems target the 8-match pool.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        let defs = [
            // 13-match pools
            SystemDefinition::new("M-3-2", SystemShape::new(3, 2, 108, 13), SystemKind::Full),
            SystemDefinition::new("M-4-0", SystemShape::new(4, 0, 81, 13), SystemKind::Full),
            SystemDefinition::new("R-3-2-36", SystemShape::new(3, 2, 36, 12), SystemKind::Reduced),
            SystemDefinition::new("R-4-0-27", SystemShape::new(4, 0, 27, 12), SystemKind::Reduced),
            SystemDefinition::new("R-5-0-81", SystemShape::new(5, 0, 81, 12), SystemKind::Reduced),
            SystemDefinition::new("R-0-6-32", SystemShape::new(0, 6, 32, 12), SystemKind::Reduced),
            SystemDefinition::new("R-2-4-36", SystemShape::new(2, 4, 36, 12), SystemKind::Reduced),
            // 8-match compact pool
            SystemDefinition::new("T-M-2-2", SystemShape::new(2, 2, 36, 8), SystemKind::Full),
            SystemDefinition::new("T-R-3-0-9", SystemShape::new(3, 0, 9, 7), SystemKind::Reduced),
            SystemDefinition::new("T-R-2-2-12", SystemShape::new(2, 2, 12, 7), SystemKind::Reduced),
        ];
        for def in defs {
            catalog.insert(def);
        }
        catalog
    }

    /// Load a catalog from a JSON array of system definitions.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let defs: Vec<SystemDefinition> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for def in defs {
            catalog.insert(def);
        }
        Ok(catalog)
    }

    /// Insert or replace a definition.
    pub fn insert(&mut self, def: SystemDefinition) {
        self.systems.insert(def.id.clone(), def);
    }

    /// Look up a system by identifier.
    pub fn get(&self, id: &str) -> Option<&SystemDefinition> {
        self.systems.get(id)
    }

    /// All identifiers in sorted order.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.systems.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// All definitions sorted by identifier.
    pub fn definitions(&self) -> Vec<&SystemDefinition> {
        let mut defs: Vec<&SystemDefinition> = self.systems.values().collect();
        defs.sort_by(|a, b| a.id.cmp(&b.id));
        defs
    }

    /// Number of systems in the catalog.
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}
