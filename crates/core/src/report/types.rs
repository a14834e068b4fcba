//! Report data types.

use chrono::{DateTime, NaiveDate, Utc};
use republicar_shared::types::{ExpenseId, OccupantId, RepublicaId, ReportId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::division::{DivisionMethod, DivisionResult};

/// An expense logged by the república.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// What was paid for.
    pub description: String,
    /// Amount paid.
    pub amount: Decimal,
    /// Date the expense was incurred.
    pub date: NaiveDate,
    /// Optional category name (e.g., "Utilities").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Inclusive date range covered by a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// First day of the period.
    pub start: NaiveDate,
    /// Last day of the period.
    pub end: NaiveDate,
}

impl ReportPeriod {
    /// Creates a period from its first and last day.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true if `date` falls within the period, bounds included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Parameters for generating a report.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// República the report belongs to.
    pub republica_id: RepublicaId,
    /// Report title.
    pub title: String,
    /// Period whose expenses are divided.
    pub period: ReportPeriod,
    /// Division method.
    pub division_method: DivisionMethod,
}

/// Report lifecycle status.
///
/// Generated reports are always `Finalized`. `Draft` is accepted when
/// loading reports stored elsewhere, e.g. a summary rebuilt from a saved
/// report that was never closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Still being edited.
    Draft,
    /// Closed and shared with occupants.
    Finalized,
}

/// A division report record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Report ID.
    pub id: ReportId,
    /// República ID.
    pub republica_id: RepublicaId,
    /// Report title.
    pub title: String,
    /// Covered period.
    pub period: ReportPeriod,
    /// Division method used.
    pub division_method: DivisionMethod,
    /// Total expenses in the period, rounded to centavos.
    pub total_expenses: Decimal,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Report status.
    pub status: ReportStatus,
}

/// One occupant's obligation within a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    /// Parent report ID.
    pub report_id: ReportId,
    /// Occupant ID.
    pub occupant_id: OccupantId,
    /// Amount owed.
    pub amount_to_pay: Decimal,
}

/// Output of report generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedReport {
    /// The report record.
    pub report: Report,
    /// Line records, one per occupant.
    pub lines: Vec<ReportLine>,
    /// Full division breakdown, including names and percentages.
    pub breakdown: Vec<DivisionResult>,
}

/// One row of the report summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    /// Occupant ID.
    pub occupant_id: OccupantId,
    /// Occupant name (empty if the occupant is no longer known).
    pub occupant_name: String,
    /// Occupant's monthly income (`None` if the occupant is no longer known).
    pub monthly_income: Option<Decimal>,
    /// Amount owed.
    pub amount_to_pay: Decimal,
    /// Share of the report total in percent, one fraction digit.
    pub share_percent: Decimal,
}

/// Report detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Total expenses of the report.
    pub total_expenses: Decimal,
    /// Sum of all line amounts.
    pub total_to_pay: Decimal,
    /// Rows in line order.
    pub lines: Vec<SummaryLine>,
}
