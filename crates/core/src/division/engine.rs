//! Division calculation engine.
//!
//! Equal division gives every occupant `round(total / n)` and does not
//! reconcile; the parts may miss the total by up to `n * 0.005`.
//!
//! Proportional division gives each occupant `round(total * income / total_income)`
//! and then assigns any cent drift to the occupant with the highest income
//! (first one in roster order on ties), so the parts add up to the rounded total.

use std::collections::HashSet;

use republicar_shared::types::{RoundingMode, round_currency};
use rust_decimal::Decimal;

use super::error::DivisionError;
use super::types::{DivisionMethod, DivisionResult, Occupant};

/// Stateless calculator for per-occupant payment obligations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DivisionEngine {
    rounding: RoundingMode,
}

impl DivisionEngine {
    /// Creates an engine using the given midpoint rounding rule.
    #[must_use]
    pub const fn new(rounding: RoundingMode) -> Self {
        Self { rounding }
    }

    /// Returns the rounding rule in use.
    #[must_use]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Divides `total_expenses` using the given method.
    pub fn divide(
        &self,
        method: DivisionMethod,
        total_expenses: Decimal,
        occupants: &[Occupant],
    ) -> Result<Vec<DivisionResult>, DivisionError> {
        match method {
            DivisionMethod::Equal => self.equal(total_expenses, occupants),
            DivisionMethod::Proportional => self.proportional(total_expenses, occupants),
        }
    }

    /// Splits the total into identical shares.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster is empty or contains invalid data.
    pub fn equal(
        &self,
        total_expenses: Decimal,
        occupants: &[Occupant],
    ) -> Result<Vec<DivisionResult>, DivisionError> {
        validate_roster(total_expenses, occupants)?;

        let count = Decimal::from(occupants.len());
        let amount_per_person = round_currency(total_expenses / count, self.rounding);

        Ok(occupants
            .iter()
            .map(|o| DivisionResult::for_occupant(o, amount_per_person))
            .collect())
    }

    /// Splits the total in proportion to monthly income.
    ///
    /// # Errors
    ///
    /// Returns `DivisionError::ZeroIncome` if nobody has an income,
    /// `DivisionError::AmountOverflow` if incomes or shares exceed the
    /// `Decimal` range, or an input error if the roster is empty or contains
    /// invalid data.
    pub fn proportional(
        &self,
        total_expenses: Decimal,
        occupants: &[Occupant],
    ) -> Result<Vec<DivisionResult>, DivisionError> {
        validate_roster(total_expenses, occupants)?;

        let total_income = checked_sum(occupants.iter().map(|o| o.monthly_income))
            .ok_or(DivisionError::AmountOverflow)?;
        if total_income.is_zero() {
            return Err(DivisionError::ZeroIncome);
        }

        let mut results = occupants
            .iter()
            .map(|o| {
                let factor = o
                    .monthly_income
                    .checked_div(total_income)
                    .ok_or(DivisionError::AmountOverflow)?;
                let share = total_expenses
                    .checked_mul(factor)
                    .ok_or(DivisionError::AmountOverflow)?;
                let percentage = factor
                    .checked_mul(Decimal::ONE_HUNDRED)
                    .ok_or(DivisionError::AmountOverflow)?;

                let mut result =
                    DivisionResult::for_occupant(o, round_currency(share, self.rounding));
                result.percentage = Some(round_currency(percentage, self.rounding));
                Ok(result)
            })
            .collect::<Result<Vec<_>, DivisionError>>()?;

        self.reconcile(total_expenses, &mut results)?;

        Ok(results)
    }

    /// Moves the rounding drift onto the highest earner.
    ///
    /// The sum of rounded parts can only differ from the rounded total by
    /// whole cents, so any non-zero difference is at least one cent.
    fn reconcile(
        &self,
        total_expenses: Decimal,
        results: &mut [DivisionResult],
    ) -> Result<(), DivisionError> {
        let target = round_currency(total_expenses, self.rounding);
        let difference = checked_sum(results.iter().map(|r| r.amount_to_pay))
            .and_then(|sum_of_parts| target.checked_sub(sum_of_parts))
            .ok_or(DivisionError::AmountOverflow)?;

        if difference.is_zero() {
            return Ok(());
        }

        let Some(highest) = highest_income_index(results) else {
            return Ok(());
        };

        let entry = &mut results[highest];
        let adjusted = entry
            .amount_to_pay
            .checked_add(difference)
            .ok_or(DivisionError::AmountOverflow)?;
        entry.amount_to_pay = round_currency(adjusted, self.rounding);

        tracing::debug!(
            occupant_id = %entry.occupant_id,
            %difference,
            "Assigned rounding difference to highest income"
        );

        Ok(())
    }
}

/// Divides equally using the default rounding rule.
pub fn compute_equal_division(
    total_expenses: Decimal,
    occupants: &[Occupant],
) -> Result<Vec<DivisionResult>, DivisionError> {
    DivisionEngine::default().equal(total_expenses, occupants)
}

/// Divides proportionally to income using the default rounding rule.
pub fn compute_proportional_division(
    total_expenses: Decimal,
    occupants: &[Occupant],
) -> Result<Vec<DivisionResult>, DivisionError> {
    DivisionEngine::default().proportional(total_expenses, occupants)
}

fn validate_roster(total_expenses: Decimal, occupants: &[Occupant]) -> Result<(), DivisionError> {
    if occupants.is_empty() {
        return Err(DivisionError::EmptyRoster);
    }

    if total_expenses.is_sign_negative() && !total_expenses.is_zero() {
        return Err(DivisionError::NegativeTotal);
    }

    let mut seen = HashSet::with_capacity(occupants.len());
    for occupant in occupants {
        if occupant.monthly_income.is_sign_negative() && !occupant.monthly_income.is_zero() {
            return Err(DivisionError::NegativeIncome(occupant.id.clone()));
        }
        if !seen.insert(&occupant.id) {
            return Err(DivisionError::DuplicateOccupant(occupant.id.clone()));
        }
    }

    Ok(())
}

/// Adds amounts, returning `None` if the sum leaves the `Decimal` range.
pub(crate) fn checked_sum(amounts: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
}

/// Index of the first result whose income is not exceeded by any later one.
fn highest_income_index(results: &[DivisionResult]) -> Option<usize> {
    results
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, Decimal)>, (i, r)| match best {
            Some((_, income)) if r.monthly_income <= income => best,
            _ => Some((i, r.monthly_income)),
        })
        .map(|(i, _)| i)
}
