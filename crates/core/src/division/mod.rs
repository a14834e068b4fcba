//! Expense division among the occupants of a república.
//!
//! Two methods are supported:
//! - `Equal` - every occupant pays the same rounded share
//! - `Proportional` - each occupant pays in proportion to monthly income,
//!   with the rounding drift assigned to the highest earner

pub mod engine;
pub mod error;
pub mod types;

#[cfg(test)]
mod props;

pub use engine::{DivisionEngine, compute_equal_division, compute_proportional_division};
pub use error::DivisionError;
pub use types::{DivisionMethod, DivisionResult, Occupant};
