//! Division error types.

use republicar_shared::types::OccupantId;
use thiserror::Error;

/// Errors that can occur while dividing expenses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DivisionError {
    /// The occupant roster is empty.
    #[error("Cannot divide expenses without any occupants")]
    EmptyRoster,

    /// The total to divide is negative.
    #[error("Total expenses cannot be negative")]
    NegativeTotal,

    /// An occupant has a negative monthly income.
    #[error("Monthly income cannot be negative for occupant {0}")]
    NegativeIncome(OccupantId),

    /// The same occupant appears twice in the roster.
    #[error("Occupant {0} appears more than once")]
    DuplicateOccupant(OccupantId),

    /// An intermediate sum or product does not fit in a `Decimal`.
    #[error("Amounts are too large to divide")]
    AmountOverflow,

    /// Proportional division requested but nobody has an income.
    #[error(
        "Cannot perform proportional division without any registered income; switch to equal division"
    )]
    ZeroIncome,
}

impl DivisionError {
    /// Returns true for caller-side precondition violations.
    ///
    /// `ZeroIncome` is the only error that depends on the chosen method.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::ZeroIncome)
    }
}

impl From<DivisionError> for republicar_shared::AppError {
    fn from(err: DivisionError) -> Self {
        if err.is_invalid_input() {
            Self::Validation(err.to_string())
        } else {
            Self::BusinessRule(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use republicar_shared::AppError;

    #[test]
    fn test_invalid_input_classification() {
        assert!(DivisionError::EmptyRoster.is_invalid_input());
        assert!(DivisionError::NegativeTotal.is_invalid_input());
        assert!(DivisionError::NegativeIncome(OccupantId::from("a")).is_invalid_input());
        assert!(DivisionError::DuplicateOccupant(OccupantId::from("a")).is_invalid_input());
        assert!(DivisionError::AmountOverflow.is_invalid_input());
        assert!(!DivisionError::ZeroIncome.is_invalid_input());
    }

    #[test]
    fn test_app_error_mapping() {
        let err: AppError = DivisionError::EmptyRoster.into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");

        let err: AppError = DivisionError::AmountOverflow.into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");

        let err: AppError = DivisionError::ZeroIncome.into();
        assert_eq!(err.error_code(), "BUSINESS_RULE_VIOLATION");
        assert!(err.to_string().contains("switch to equal division"));
    }
}
