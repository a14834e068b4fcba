//! Property-based tests for expense division.
//!
//! - Equal division: identical shares, drift bounded by half a cent per occupant
//! - Proportional division: parts always add up to the rounded total
//! - Both: one result per occupant, in roster order, deterministic

use proptest::prelude::*;
use republicar_shared::types::{RoundingMode, currency_unit, round_currency};
use rust_decimal::Decimal;

use super::engine::{DivisionEngine, compute_equal_division, compute_proportional_division};
use super::error::DivisionError;
use super::types::{DivisionMethod, Occupant};

/// Strategy to generate expense totals (0.00 to 1,000,000.00).
fn expense_total() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate monthly incomes (0.00 to 50,000.00).
fn monthly_income() -> impl Strategy<Value = Decimal> {
    (0i64..5_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a roster of 1 to 30 occupants with unique ids.
fn roster() -> impl Strategy<Value = Vec<Occupant>> {
    prop::collection::vec(monthly_income(), 1..30).prop_map(|incomes| {
        incomes
            .into_iter()
            .enumerate()
            .map(|(i, income)| Occupant::new(format!("occ-{i}"), format!("Occupant {i}"), income))
            .collect()
    })
}

/// Strategy to generate a roster where at least one occupant has an income.
fn roster_with_income() -> impl Strategy<Value = Vec<Occupant>> {
    roster().prop_filter("needs some income", |occupants| {
        occupants.iter().any(|o| !o.monthly_income.is_zero())
    })
}

fn method() -> impl Strategy<Value = DivisionMethod> {
    prop_oneof![
        Just(DivisionMethod::Equal),
        Just(DivisionMethod::Proportional)
    ]
}

fn rounding() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::HalfAwayFromZero),
        Just(RoundingMode::HalfEven)
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every occupant pays the same amount, and the parts miss the total by
    /// at most half a cent per occupant.
    #[test]
    fn prop_equal_division_bounded_drift(
        total in expense_total(),
        occupants in roster(),
    ) {
        let results = compute_equal_division(total, &occupants).unwrap();

        let first = results[0].amount_to_pay;
        prop_assert!(results.iter().all(|r| r.amount_to_pay == first));

        let sum: Decimal = results.iter().map(|r| r.amount_to_pay).sum();
        let count = Decimal::from(occupants.len());
        let max_drift = count * currency_unit() / Decimal::from(2);
        prop_assert!((total - sum).abs() <= max_drift);
    }

    /// The reconciled parts of a proportional division add up to the total exactly.
    #[test]
    fn prop_proportional_sum_invariant(
        total in expense_total(),
        occupants in roster_with_income(),
        mode in rounding(),
    ) {
        let results = DivisionEngine::new(mode).proportional(total, &occupants).unwrap();

        let sum: Decimal = results.iter().map(|r| r.amount_to_pay).sum();
        prop_assert_eq!(sum, round_currency(total, mode));
        prop_assert!(results.iter().all(|r| r.percentage.is_some()));
    }

    /// Percentages are rounded independently and stay close to 100.
    #[test]
    fn prop_percentages_near_hundred(
        total in expense_total(),
        occupants in roster_with_income(),
    ) {
        let results = compute_proportional_division(total, &occupants).unwrap();

        let percent_sum: Decimal = results.iter().filter_map(|r| r.percentage).sum();
        let count = Decimal::from(occupants.len());
        let tolerance = count * currency_unit() / Decimal::from(2);
        prop_assert!((percent_sum - Decimal::ONE_HUNDRED).abs() <= tolerance);
    }

    /// Only the highest earner's amount may move away from its raw share.
    #[test]
    fn prop_reconciliation_touches_one_occupant(
        total in expense_total(),
        occupants in roster_with_income(),
    ) {
        let results = compute_proportional_division(total, &occupants).unwrap();
        let total_income: Decimal = occupants.iter().map(|o| o.monthly_income).sum();

        let adjusted: Vec<usize> = occupants
            .iter()
            .zip(&results)
            .enumerate()
            .filter(|(_, (o, r))| {
                let raw = round_currency(
                    total * (o.monthly_income / total_income),
                    RoundingMode::HalfAwayFromZero,
                );
                raw != r.amount_to_pay
            })
            .map(|(i, _)| i)
            .collect();

        prop_assert!(adjusted.len() <= 1);
        if let Some(&i) = adjusted.first() {
            let max_income = occupants.iter().map(|o| o.monthly_income).max().unwrap();
            prop_assert_eq!(occupants[i].monthly_income, max_income);
            prop_assert!(occupants[..i].iter().all(|o| o.monthly_income < max_income));
        }
    }

    /// One result per occupant, in roster order, with identical output on repeat calls.
    #[test]
    fn prop_complete_and_deterministic(
        total in expense_total(),
        occupants in roster_with_income(),
        method in method(),
    ) {
        let engine = DivisionEngine::default();
        let first = engine.divide(method, total, &occupants).unwrap();
        let second = engine.divide(method, total, &occupants).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), occupants.len());
        for (occupant, result) in occupants.iter().zip(&first) {
            prop_assert_eq!(&occupant.id, &result.occupant_id);
            prop_assert_eq!(&occupant.name, &result.occupant_name);
            prop_assert_eq!(occupant.monthly_income, result.monthly_income);
        }
    }

    /// A roster without income cannot be divided proportionally but can be split equally.
    #[test]
    fn prop_zero_income_only_blocks_proportional(
        total in expense_total(),
        size in 1usize..10,
    ) {
        let occupants: Vec<Occupant> = (0..size)
            .map(|i| Occupant::new(format!("occ-{i}"), "Nobody", Decimal::ZERO))
            .collect();

        prop_assert_eq!(
            compute_proportional_division(total, &occupants),
            Err(DivisionError::ZeroIncome)
        );
        prop_assert!(compute_equal_division(total, &occupants).is_ok());
    }
}
