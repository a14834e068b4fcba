//! Currency rounding with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every amount is a `rust_decimal::Decimal` and is rounded to the
//! currency's minor unit (centavos) only at well-defined points.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of fraction digits of the household currency.
pub const CURRENCY_DECIMALS: u32 = 2;

/// The smallest representable currency amount (0.01).
#[must_use]
pub fn currency_unit() -> Decimal {
    Decimal::new(1, CURRENCY_DECIMALS)
}

/// How exact `.005` midpoints are resolved when rounding to centavos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// 2.345 -> 2.35, -2.345 -> -2.35 (fixed-point formatting behaviour).
    #[default]
    HalfAwayFromZero,
    /// Banker's rounding: 2.345 -> 2.34, 2.355 -> 2.36.
    HalfEven,
}

impl RoundingMode {
    /// Returns the matching `rust_decimal` strategy.
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HalfAwayFromZero => write!(f, "half_away_from_zero"),
            Self::HalfEven => write!(f, "half_even"),
        }
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "half_away_from_zero" => Ok(Self::HalfAwayFromZero),
            "half_even" | "bankers" => Ok(Self::HalfEven),
            _ => Err(format!("Unknown rounding mode: {s}")),
        }
    }
}

/// Rounds an amount to exactly [`CURRENCY_DECIMALS`] fraction digits.
///
/// Whole amounts are padded, so `200` becomes `200.00`.
#[must_use]
pub fn round_currency(amount: Decimal, mode: RoundingMode) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(CURRENCY_DECIMALS, mode.strategy());
    rounded.rescale(CURRENCY_DECIMALS);
    rounded
}
