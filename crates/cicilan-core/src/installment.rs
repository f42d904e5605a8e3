//! Monthly installment calculation with tiered flat interest.
//!
//! Interest is flat: computed once on the full principal for the whole
//! tenor, never recalculated per period. The tier table is the one from the
//! office's credit flowchart. All math uses `rust_decimal::Decimal`; the
//! monthly figure keeps full precision and is only rounded at display time
//! by the [`crate::format`] helpers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::CicilanError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::validation::validate_loan_input;
use crate::CicilanResult;

const PERCENT_DIVISOR: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Input / Output Types
// ---------------------------------------------------------------------------

/// Input for an installment quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// On-the-road vehicle price.
    pub otr: Money,
    /// Down payment, reduces the financed principal.
    pub dp: Money,
    /// Loan duration in months, 1–60.
    pub tenor_months: u32,
    /// Display label only; has no effect on the computation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
}

/// A computed installment quote. Derived once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanResult {
    pub otr: Money,
    pub dp: Money,
    pub tenor_months: u32,
    /// otr − dp.
    pub principal: Money,
    /// Tier rate in percent, selected on tenor.
    pub interest_rate_percent: Rate,
    /// principal × rate / 100, flat over the full tenor.
    pub total_interest: Money,
    /// principal + total interest.
    pub total_debt: Money,
    /// total debt / tenor, full precision.
    pub monthly_installment: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Tier lookup on tenor. Inclusive upper bounds, ascending, first match wins.
pub fn interest_rate_for_tenor(tenor_months: u32) -> Rate {
    if tenor_months <= 12 {
        dec!(12)
    } else if tenor_months <= 24 {
        dec!(14)
    } else {
        dec!(16.5)
    }
}

/// Compute an installment quote from validated inputs.
///
/// Inputs are re-checked against the form rules; any violation is returned
/// as [`CicilanError::InvalidInput`] rather than producing a nonsensical
/// quote. Deterministic: identical inputs yield identical results.
pub fn calculate_installment(input: &LoanInput) -> CicilanResult<ComputationOutput<LoanResult>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    ensure_valid(input)?;

    let principal = input.otr - input.dp;
    let interest_rate_percent = interest_rate_for_tenor(input.tenor_months);
    let total_interest = principal * interest_rate_percent / PERCENT_DIVISOR;
    let total_debt = principal + total_interest;

    let tenor = Decimal::from(input.tenor_months);
    if tenor.is_zero() {
        return Err(CicilanError::DivisionByZero {
            context: "monthly installment tenor".into(),
        });
    }
    let monthly_installment = total_debt / tenor;

    let result = LoanResult {
        otr: input.otr,
        dp: input.dp,
        tenor_months: input.tenor_months,
        principal,
        interest_rate_percent,
        total_interest,
        total_debt,
        monthly_installment,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Flat-rate installment — tiered interest on full principal, level monthly payments",
        &serde_json::json!({
            "otr": input.otr.to_string(),
            "dp": input.dp.to_string(),
            "tenor_months": input.tenor_months,
            "interest_rate_percent": interest_rate_percent.to_string(),
        }),
        warnings,
        elapsed,
        result,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn ensure_valid(input: &LoanInput) -> CicilanResult<()> {
    let report =
        validate_loan_input(Some(input.otr), Some(input.dp), Some(input.tenor_months));
    match report.field_errors.into_iter().next() {
        Some((field, reason)) => Err(CicilanError::InvalidInput { field, reason }),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
