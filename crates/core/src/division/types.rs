//! Division data types.

use republicar_shared::types::OccupantId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a total is split among occupants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionMethod {
    /// Everyone pays the same share.
    #[default]
    Equal,
    /// Shares are weighted by monthly income.
    Proportional,
}

impl DivisionMethod {
    /// Human-readable label used in exports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Equal => "Equal split",
            Self::Proportional => "Proportional to income",
        }
    }
}

impl std::fmt::Display for DivisionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Equal => write!(f, "equal"),
            Self::Proportional => write!(f, "proportional"),
        }
    }
}

impl std::str::FromStr for DivisionMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "equal" => Ok(Self::Equal),
            "proportional" => Ok(Self::Proportional),
            _ => Err(format!("Unknown division method: {s}")),
        }
    }
}

/// An occupant as seen by the division engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    /// Occupant ID.
    pub id: OccupantId,
    /// Display name.
    pub name: String,
    /// Monthly income, used for proportional division.
    pub monthly_income: Decimal,
}

impl Occupant {
    /// Creates a new occupant record.
    #[must_use]
    pub fn new(id: impl Into<OccupantId>, name: impl Into<String>, monthly_income: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            monthly_income,
        }
    }
}

/// What one occupant owes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionResult {
    /// Occupant ID.
    pub occupant_id: OccupantId,
    /// Occupant name.
    pub occupant_name: String,
    /// Monthly income copied from the roster.
    pub monthly_income: Decimal,
    /// Amount owed, rounded to centavos.
    pub amount_to_pay: Decimal,
    /// Share of total income in percent (proportional division only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Decimal>,
}

impl DivisionResult {
    pub(crate) fn for_occupant(occupant: &Occupant, amount_to_pay: Decimal) -> Self {
        Self {
            occupant_id: occupant.id.clone(),
            occupant_name: occupant.name.clone(),
            monthly_income: occupant.monthly_income,
            amount_to_pay,
            percentage: None,
        }
    }
}
