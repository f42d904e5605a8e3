use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use cicilan_core::installment::{self, LoanInput};
use cicilan_core::schedule::{build_schedule, Contract};
use cicilan_core::validation::validate_loan_input;

use crate::input;

/// Arguments for an installment quote
#[derive(Args)]
pub struct CalculateArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// On-the-road price
    #[arg(long)]
    pub otr: Option<Decimal>,

    /// Down payment
    #[arg(long)]
    pub dp: Option<Decimal>,

    /// Tenor in months (1-60)
    #[arg(long)]
    pub tenor_months: Option<u32>,

    /// Client name (display only)
    #[arg(long)]
    pub client_name: Option<String>,
}

/// Arguments for input validation
#[derive(Args)]
pub struct ValidateArgs {
    /// On-the-road price
    #[arg(long)]
    pub otr: Option<Decimal>,

    /// Down payment
    #[arg(long)]
    pub dp: Option<Decimal>,

    /// Tenor in months
    #[arg(long)]
    pub tenor_months: Option<u32>,
}

/// Arguments for schedule generation
#[derive(Args)]
pub struct ScheduleArgs {
    /// On-the-road price
    #[arg(long)]
    pub otr: Option<Decimal>,

    /// Down payment
    #[arg(long)]
    pub dp: Option<Decimal>,

    /// Tenor in months (1-60)
    #[arg(long)]
    pub tenor_months: Option<u32>,

    /// Client name on the contract
    #[arg(long)]
    pub client_name: Option<String>,

    /// Contract number to stamp on the schedule
    #[arg(long, default_value = "DRAFT")]
    pub contract_no: String,

    /// Due date of the first installment (YYYY-MM-DD)
    #[arg(long)]
    pub first_due_date: NaiveDate,

    /// Contract creation date; defaults to the first due date
    #[arg(long)]
    pub created_at: Option<NaiveDate>,
}

pub fn run_calculate(args: CalculateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input: LoanInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanInput {
            otr: args.otr.ok_or("--otr is required (or provide --input)")?,
            dp: args.dp.ok_or("--dp is required (or provide --input)")?,
            tenor_months: args
                .tenor_months
                .ok_or("--tenor-months is required (or provide --input)")?,
            client_name: args.client_name,
        }
    };

    let result = installment::calculate_installment(&loan_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_validate(args: ValidateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let report = validate_loan_input(args.otr, args.dp, args.tenor_months);
    Ok(serde_json::json!({
        "valid": report.is_valid(),
        "field_errors": report.field_errors,
    }))
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input = LoanInput {
        otr: args.otr.ok_or("--otr is required")?,
        dp: args.dp.ok_or("--dp is required")?,
        tenor_months: args.tenor_months.ok_or("--tenor-months is required")?,
        client_name: args.client_name.clone(),
    };

    let quote = installment::calculate_installment(&loan_input)?.result;
    let contract = Contract::from_quote(
        args.contract_no,
        args.client_name.unwrap_or_else(|| "-".to_string()),
        &quote,
        args.created_at.unwrap_or(args.first_due_date),
    );
    let installments = build_schedule(&contract, args.first_due_date)?;

    Ok(serde_json::json!({
        "contract": contract,
        "installments": installments,
    }))
}
