//! Late-payment penalty calculation.
//!
//! The fee accrues linearly at 0.1% of the installment amount per day
//! overdue, with no ceiling. Payment status is the caller's concern:
//! already-paid installments must be filtered out before reaching this
//! module.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::CicilanError;
use crate::types::Money;
use crate::CicilanResult;

/// Daily late fee as a fraction of the installment amount (0.1% per day).
pub const DAILY_PENALTY_RATE: Decimal = dec!(0.001);

// ---------------------------------------------------------------------------
// Input / Output Types
// ---------------------------------------------------------------------------

/// Penalty accrued on a single installment as of an evaluation date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyBreakdown {
    pub days_overdue: u32,
    pub penalty_amount: Money,
}

/// Aggregate view over a set of overdue installments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltySummary {
    pub overdue_count: u32,
    pub total_penalty: Money,
    pub total_days_overdue: u32,
    /// Arithmetic mean of days overdue, rounded to the nearest whole day.
    pub mean_days_overdue: u32,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Whole days between due date and evaluation date, floored at zero.
///
/// An installment due in the future, or due exactly on the evaluation date,
/// is not overdue.
pub fn days_overdue(due_date: NaiveDate, evaluation_date: NaiveDate) -> u32 {
    (evaluation_date - due_date).num_days().max(0) as u32
}

/// Penalty on one unpaid installment as of `evaluation_date`.
pub fn compute_penalty(
    installment_amount: Money,
    due_date: NaiveDate,
    evaluation_date: NaiveDate,
) -> CicilanResult<PenaltyBreakdown> {
    if installment_amount < Decimal::ZERO {
        return Err(CicilanError::InvalidInput {
            field: "installment_amount".into(),
            reason: "Installment amount must not be negative".into(),
        });
    }

    let days = days_overdue(due_date, evaluation_date);
    let penalty_amount = installment_amount * DAILY_PENALTY_RATE * Decimal::from(days);

    Ok(PenaltyBreakdown {
        days_overdue: days,
        penalty_amount,
    })
}

/// Totals and mean lateness across a set of overdue installments.
pub fn summarize_penalties(breakdowns: &[PenaltyBreakdown]) -> PenaltySummary {
    let overdue_count = breakdowns.len() as u32;
    let total_penalty: Money = breakdowns.iter().map(|b| b.penalty_amount).sum();
    let total_days_overdue: u32 = breakdowns.iter().map(|b| b.days_overdue).sum();

    let mean_days_overdue = if overdue_count == 0 {
        0
    } else {
        (Decimal::from(total_days_overdue) / Decimal::from(overdue_count))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(0)
    };

    PenaltySummary {
        overdue_count,
        total_penalty,
        total_days_overdue,
        mean_days_overdue,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
