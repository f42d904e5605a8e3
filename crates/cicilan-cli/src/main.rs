mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::calculate::{CalculateArgs, ScheduleArgs, ValidateArgs};
use commands::penalty::PenaltyArgs;
use commands::reports::{DueSummaryArgs, PenaltyReportArgs};

/// Installment-loan calculations for the finance office
#[derive(Parser)]
#[command(
    name = "cicilan",
    version,
    about = "Installment-loan (cicilan) calculations",
    long_about = "A CLI for vehicle installment-loan calculations with decimal precision. \
                  Supports installment quotes with tiered flat interest, input validation, \
                  payment schedules, fallen-due summaries, and late-payment penalty reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a monthly installment quote (tiered flat interest)
    Calculate(CalculateArgs),
    /// Validate loan inputs and report per-field messages
    Validate(ValidateArgs),
    /// Generate the payment schedule for a fresh contract
    Schedule(ScheduleArgs),
    /// Late-payment penalty for a single installment
    Penalty(PenaltyArgs),
    /// Total installment amounts fallen due per contract
    DueSummary(DueSummaryArgs),
    /// Penalties on unpaid overdue installments
    PenaltyReport(PenaltyReportArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Calculate(args) => commands::calculate::run_calculate(args),
        Commands::Validate(args) => commands::calculate::run_validate(args),
        Commands::Schedule(args) => commands::calculate::run_schedule(args),
        Commands::Penalty(args) => commands::penalty::run_penalty(args),
        Commands::DueSummary(args) => commands::reports::run_due_summary(args),
        Commands::PenaltyReport(args) => commands::reports::run_penalty_report(args),
        Commands::Version => {
            println!("cicilan {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
