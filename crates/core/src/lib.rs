//! Core business logic for Republicar.
//!
//! This crate contains pure business logic with ZERO file, database or web
//! dependencies. All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `division` - Splitting a household's expenses among its occupants
//! - `report` - Report generation, summaries and plain-text export

pub mod division;
pub mod report;
