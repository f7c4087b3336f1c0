use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::StateRef;

/// Immutable state-id -> state-name reference table.
///
/// Loaded once per run from the OFLC state-ids CSV; the file's row order
/// is preserved because it drives the ordering of the by-state report.
pub struct StateTable {
    rows: Vec<StateRef>,
    names: HashMap<u32, String>,
}

impl StateTable {
    /// Load the reference table from a CSV file with a
    /// `state_id,state_name` header
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("failed to open state reference table {}", path.display()))?;

        let mut rows = Vec::new();
        for record in reader.deserialize() {
            let row: StateRef = record
                .with_context(|| format!("malformed row in {}", path.display()))?;
            rows.push(row);
        }

        info!("Loaded {} states from {}", rows.len(), path.display());
        Ok(Self::from_rows(rows))
    }

    pub fn from_rows(rows: Vec<StateRef>) -> Self {
        let names = rows
            .iter()
            .map(|r| (r.state_id, r.state_name.clone()))
            .collect();
        Self { rows, names }
    }

    /// Look up the human-readable name for a state id
    pub fn name(&self, state_id: u32) -> Option<&str> {
        self.names.get(&state_id).map(String::as_str)
    }

    /// Iterate rows in file order
    pub fn iter(&self) -> impl Iterator<Item = &StateRef> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
