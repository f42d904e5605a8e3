use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use cicilan_core::penalty;

/// Arguments for a single-installment penalty calculation
#[derive(Args)]
pub struct PenaltyArgs {
    /// Installment amount
    #[arg(long)]
    pub amount: Decimal,

    /// Installment due date (YYYY-MM-DD)
    #[arg(long)]
    pub due_date: NaiveDate,

    /// Date the penalty is evaluated at (YYYY-MM-DD)
    #[arg(long)]
    pub evaluation_date: NaiveDate,
}

pub fn run_penalty(args: PenaltyArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let breakdown = penalty::compute_penalty(args.amount, args.due_date, args.evaluation_date)?;
    Ok(serde_json::to_value(breakdown)?)
}
