//! Report generation service.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use republicar_shared::types::{ReportId, round_currency};
use rust_decimal::Decimal;

use super::error::ReportError;
use super::types::{
    Expense, GeneratedReport, Report, ReportLine, ReportPeriod, ReportRequest, ReportStatus,
    ReportSummary, SummaryLine,
};
use crate::division::{DivisionEngine, DivisionError, Occupant};

/// Service for generating division reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportService {
    engine: DivisionEngine,
}

impl ReportService {
    /// Creates a service backed by the given division engine.
    #[must_use]
    pub const fn new(engine: DivisionEngine) -> Self {
        Self { engine }
    }

    /// Returns the expenses dated within the period, in input order.
    #[must_use]
    pub fn expenses_in_period<'a>(expenses: &'a [Expense], period: &ReportPeriod) -> Vec<&'a Expense> {
        expenses.iter().filter(|e| period.contains(e.date)).collect()
    }

    /// Sums expense amounts without rounding.
    ///
    /// Returns `None` if the sum does not fit in a `Decimal`.
    #[must_use]
    pub fn total_expenses<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> Option<Decimal> {
        expenses
            .into_iter()
            .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.amount))
    }

    /// Generates a finalized report for the period.
    ///
    /// Checks run in order: title, date range, occupants, then the period total.
    ///
    /// # Errors
    ///
    /// Returns a `ReportError` describing the first failed check, or the
    /// division error if the split itself is impossible.
    pub fn generate(
        &self,
        request: &ReportRequest,
        expenses: &[Expense],
        occupants: &[Occupant],
    ) -> Result<GeneratedReport, ReportError> {
        self.generate_with(request, expenses, occupants, ReportId::generate(), Utc::now())
    }

    fn generate_with(
        &self,
        request: &ReportRequest,
        expenses: &[Expense],
        occupants: &[Occupant],
        id: ReportId,
        created_at: DateTime<Utc>,
    ) -> Result<GeneratedReport, ReportError> {
        if request.title.trim().is_empty() {
            return Err(ReportError::MissingTitle);
        }

        let period = request.period;
        if period.start > period.end {
            return Err(ReportError::InvalidDateRange {
                start: period.start,
                end: period.end,
            });
        }

        if occupants.is_empty() {
            return Err(ReportError::NoOccupants);
        }

        let in_period = Self::expenses_in_period(expenses, &period);
        let total = Self::total_expenses(in_period.iter().copied())
            .ok_or(DivisionError::AmountOverflow)?;
        if total.is_zero() {
            return Err(ReportError::NoExpenses);
        }

        let breakdown = self
            .engine
            .divide(request.division_method, total, occupants)?;

        let report = Report {
            id,
            republica_id: request.republica_id.clone(),
            title: request.title.trim().to_string(),
            period,
            division_method: request.division_method,
            total_expenses: round_currency(total, self.engine.rounding()),
            created_at,
            status: ReportStatus::Finalized,
        };

        let lines = breakdown
            .iter()
            .map(|r| ReportLine {
                report_id: report.id.clone(),
                occupant_id: r.occupant_id.clone(),
                amount_to_pay: r.amount_to_pay,
            })
            .collect();

        tracing::info!(
            report_id = %report.id,
            republica_id = %report.republica_id,
            method = %report.division_method,
            expenses = in_period.len(),
            occupants = occupants.len(),
            total = %report.total_expenses,
            "Generated division report"
        );

        Ok(GeneratedReport {
            report,
            lines,
            breakdown,
        })
    }

    /// Builds the detail view of a stored report.
    ///
    /// Occupants are looked up by ID; lines for unknown occupants keep an
    /// empty name and no income.
    #[must_use]
    pub fn summarize(
        &self,
        report: &Report,
        lines: &[ReportLine],
        occupants: &[Occupant],
    ) -> ReportSummary {
        let by_id: HashMap<_, _> = occupants.iter().map(|o| (&o.id, o)).collect();
        let strategy = self.engine.rounding().strategy();

        let summary_lines = lines
            .iter()
            .filter(|l| l.report_id == report.id)
            .map(|l| {
                let share_percent = l
                    .amount_to_pay
                    .checked_div(report.total_expenses)
                    .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                    .map_or(Decimal::ZERO, |p| p.round_dp_with_strategy(1, strategy));
                let occupant = by_id.get(&l.occupant_id);
                SummaryLine {
                    occupant_id: l.occupant_id.clone(),
                    occupant_name: occupant.map(|o| o.name.clone()).unwrap_or_default(),
                    monthly_income: occupant.map(|o| o.monthly_income),
                    amount_to_pay: l.amount_to_pay,
                    share_percent,
                }
            })
            .collect::<Vec<_>>();

        ReportSummary {
            total_expenses: report.total_expenses,
            total_to_pay: summary_lines
                .iter()
                .fold(Decimal::ZERO, |acc, l| acc.saturating_add(l.amount_to_pay)),
            lines: summary_lines,
        }
    }
}
