use chrono::NaiveDate;
use clap::Args;
use serde_json::Value;

use cicilan_core::reports;
use cicilan_core::schedule::ContractSchedule;

use crate::input;

/// Arguments for the fallen-due summary
#[derive(Args)]
pub struct DueSummaryArgs {
    /// Path to a JSON dataset of contracts with schedules
    #[arg(long)]
    pub input: Option<String>,

    /// Client name to report on
    #[arg(long)]
    pub client_name: String,

    /// Cutoff date (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,
}

/// Arguments for the penalty report
#[derive(Args)]
pub struct PenaltyReportArgs {
    /// Path to a JSON dataset of contracts with schedules
    #[arg(long)]
    pub input: Option<String>,

    /// Client name to report on
    #[arg(long)]
    pub client_name: String,

    /// Evaluation date (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,
}

pub fn run_due_summary(args: DueSummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let dataset = load_dataset(args.input.as_deref())?;
    let result = reports::due_summary(&dataset, &args.client_name, args.date)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_penalty_report(args: PenaltyReportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let dataset = load_dataset(args.input.as_deref())?;
    let result = reports::penalty_report(&dataset, &args.client_name, args.date)?;
    Ok(serde_json::to_value(result)?)
}

/// Load the contract dataset from a file or piped stdin.
fn load_dataset(path: Option<&str>) -> Result<Vec<ContractSchedule>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return input::file::read_json(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }
    Err("--input <dataset.json> or piped stdin is required".into())
}
