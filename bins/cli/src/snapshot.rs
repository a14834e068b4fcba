//! Household snapshot files.
//!
//! A snapshot is the JSON export of one república's occupants and expenses:
//!
//! ```json
//! {
//!   "republica_id": "rep-1",
//!   "occupants": [{ "id": "1", "name": "Ana", "monthly_income": "1500.00" }],
//!   "expenses": [{ "id": "e1", "description": "Rent", "amount": "900.00", "date": "2025-03-05" }]
//! }
//! ```

use std::path::Path;

use republicar_core::division::Occupant;
use republicar_core::report::Expense;
use republicar_shared::types::RepublicaId;
use republicar_shared::{AppError, AppResult};
use serde::Deserialize;

/// Occupants and expenses of one república.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    /// República ID.
    pub republica_id: RepublicaId,
    /// Occupant roster, in insertion order.
    #[serde(default)]
    pub occupants: Vec<Occupant>,
    /// Logged expenses.
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Snapshot {
    /// Reads and parses a snapshot file.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Io(format!("Cannot read snapshot {}: {e}", path.display()))
        })?;
        Self::from_json(&raw)
            .map_err(|e| AppError::Validation(format!("Invalid snapshot {}: {e}", path.display())))
    }

    /// Parses a snapshot from JSON text.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
