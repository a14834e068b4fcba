//! Division report generation.
//!
//! This module provides pure business logic for the report workflow:
//! - Filtering a república's expenses to the report period
//! - Dividing the period total among occupants
//! - Building report and report-line records
//! - Summaries and plain-text export

pub mod error;
pub mod export;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use export::render_text;
pub use service::ReportService;
pub use types::*;
