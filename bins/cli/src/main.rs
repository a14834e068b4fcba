//! Republicar command-line interface.
//!
//! Reads a household snapshot, divides its expenses and prints the result.
//!
//! Usage:
//!   republicar report --input snapshot.json --title "March" --from 2025-03-01 --to 2025-03-31
//!   republicar divide --input snapshot.json --total 400 --method proportional

mod snapshot;

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use republicar_core::division::{DivisionEngine, DivisionMethod};
use republicar_core::report::{
    GeneratedReport, ReportPeriod, ReportRequest, ReportService, ReportSummary, render_text,
};
use republicar_shared::config::LoggingConfig;
use republicar_shared::{AppConfig, AppError};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::snapshot::Snapshot;

#[derive(Debug, Parser)]
#[command(
    name = "republicar",
    version,
    about = "Split a república's expenses among its occupants"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a division report for the expenses of a period.
    Report {
        /// Snapshot file with occupants and expenses.
        #[arg(long)]
        input: PathBuf,
        /// Report title.
        #[arg(long)]
        title: String,
        /// First day of the period (YYYY-MM-DD).
        #[arg(long)]
        from: NaiveDate,
        /// Last day of the period (YYYY-MM-DD).
        #[arg(long)]
        to: NaiveDate,
        /// Division method; defaults to the configured one.
        #[arg(long)]
        method: Option<DivisionMethod>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Divide an explicit total among the snapshot's occupants.
    Divide {
        /// Snapshot file with occupants.
        #[arg(long)]
        input: PathBuf,
        /// Amount to divide.
        #[arg(long)]
        total: Decimal,
        /// Division method; defaults to the configured one.
        #[arg(long)]
        method: Option<DivisionMethod>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    #[serde(flatten)]
    generated: &'a GeneratedReport,
    summary: ReportSummary,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let err = AppError::from(err);
            eprintln!("{err}");
            return ExitCode::from(err.exit_code());
        }
    };

    init_tracing(&config.logging);

    match run(cli.command, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let app_error = err.downcast_ref::<AppError>();
            error!(
                code = app_error.map_or("INTERNAL_ERROR", AppError::error_code),
                "{err:#}"
            );
            ExitCode::from(app_error.map_or(1, AppError::exit_code))
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(command: Command, config: &AppConfig) -> anyhow::Result<String> {
    let engine = DivisionEngine::new(config.division.rounding);

    match command {
        Command::Report {
            input,
            title,
            from,
            to,
            method,
            format,
        } => {
            let snapshot = Snapshot::from_path(&input)?;
            info!(
                republica_id = %snapshot.republica_id,
                occupants = snapshot.occupants.len(),
                expenses = snapshot.expenses.len(),
                "Loaded snapshot"
            );

            let request = ReportRequest {
                republica_id: snapshot.republica_id.clone(),
                title,
                period: ReportPeriod::new(from, to),
                division_method: resolve_method(method, config)?,
            };

            let service = ReportService::new(engine);
            let generated = service
                .generate(&request, &snapshot.expenses, &snapshot.occupants)
                .map_err(AppError::from)?;
            let summary = service.summarize(&generated.report, &generated.lines, &snapshot.occupants);

            match format {
                OutputFormat::Json => {
                    let output = ReportOutput {
                        generated: &generated,
                        summary,
                    };
                    serde_json::to_string_pretty(&output).context("Failed to serialize report")
                }
                OutputFormat::Text => Ok(render_text(
                    &generated.report,
                    &summary,
                    &config.report.currency_symbol,
                    Utc::now().date_naive(),
                )),
            }
        }
        Command::Divide {
            input,
            total,
            method,
        } => {
            let snapshot = Snapshot::from_path(&input)?;
            let method = resolve_method(method, config)?;
            let results = engine
                .divide(method, total, &snapshot.occupants)
                .map_err(AppError::from)?;
            info!(%method, %total, occupants = results.len(), "Divided total");
            serde_json::to_string_pretty(&results).context("Failed to serialize division")
        }
    }
}

fn resolve_method(
    requested: Option<DivisionMethod>,
    config: &AppConfig,
) -> Result<DivisionMethod, AppError> {
    match requested {
        Some(method) => Ok(method),
        None => DivisionMethod::from_str(&config.division.default_method).map_err(AppError::Config),
    }
}
