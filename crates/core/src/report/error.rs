//! Report error types.

use chrono::NaiveDate;
use thiserror::Error;

use crate::division::DivisionError;

/// Errors that can occur during report generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Report title is blank.
    #[error("Report title is required")]
    MissingTitle,

    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// The república has no occupants.
    #[error("Add occupants to the república before generating a report")]
    NoOccupants,

    /// No expenses were recorded in the period.
    #[error("No expenses recorded in the period")]
    NoExpenses,

    /// The division itself failed.
    #[error(transparent)]
    Division(#[from] DivisionError),
}

impl From<ReportError> for republicar_shared::AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Division(inner) => inner.into(),
            ReportError::NoExpenses => Self::BusinessRule(err.to_string()),
            ReportError::MissingTitle
            | ReportError::InvalidDateRange { .. }
            | ReportError::NoOccupants => Self::Validation(err.to_string()),
        }
    }
}
