//! Plain-text report export.

use chrono::NaiveDate;
use republicar_shared::types::{RoundingMode, round_currency};
use rust_decimal::Decimal;

use super::types::{Report, ReportSummary};

const DATE_FORMAT: &str = "%d/%m/%Y";

/// Renders a report as a plain-text document suitable for sharing.
#[must_use]
pub fn render_text(
    report: &Report,
    summary: &ReportSummary,
    currency_symbol: &str,
    generated_on: NaiveDate,
) -> String {
    let mut lines = vec![
        "DIVISION REPORT".to_string(),
        report.title.clone(),
        String::new(),
        format!(
            "Period: {} to {}",
            report.period.start.format(DATE_FORMAT),
            report.period.end.format(DATE_FORMAT)
        ),
        format!("Method: {}", report.division_method.label()),
        String::new(),
        format!(
            "Total expenses: {currency_symbol} {}",
            format_amount(report.total_expenses)
        ),
        String::new(),
        "SPLIT BY OCCUPANT:".to_string(),
    ];
    lines.extend(summary.lines.iter().map(|line| {
        format!(
            "{}: {currency_symbol} {}",
            line.occupant_name,
            format_amount(line.amount_to_pay)
        )
    }));
    lines.extend([
        String::new(),
        "---".to_string(),
        format!("Generated on: {}", generated_on.format(DATE_FORMAT)),
    ]);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Formats an amount with exactly two fraction digits.
fn format_amount(amount: Decimal) -> String {
    round_currency(amount, RoundingMode::HalfAwayFromZero).to_string()
}
