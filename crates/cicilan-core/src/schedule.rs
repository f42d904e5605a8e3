//! Contract records and their installment schedules.
//!
//! A contract carries the quoted terms; its schedule is one installment per
//! tenor month with due dates advancing by calendar months. Payment status
//! lives on the schedule entries and drives the progress figures shown on
//! the contract list.

use chrono::{Months, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::CicilanError;
use crate::installment::LoanResult;
use crate::types::{Money, Rate};
use crate::CicilanResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A written loan contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub contract_no: String,
    pub client_name: String,
    pub otr: Money,
    pub dp: Money,
    pub tenor_months: u32,
    pub interest_rate_percent: Rate,
    pub monthly_installment: Money,
    pub created_at: NaiveDate,
}

/// Whether a scheduled installment has been settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallmentStatus {
    Paid,
    Unpaid,
}

/// One line of a contract's payment schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledInstallment {
    /// 1-based sequence position.
    pub installment_no: u32,
    pub amount: Money,
    pub due_date: NaiveDate,
    pub status: InstallmentStatus,
}

/// A contract together with its schedule; the dataset row the canned
/// reports consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSchedule {
    pub contract: Contract,
    pub installments: Vec<ScheduledInstallment>,
}

/// Paid/unpaid counts derived from a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentProgress {
    pub paid: u32,
    pub unpaid: u32,
    /// paid / (paid + unpaid), in whole percent.
    pub progress_percent: u32,
}

/// Contract standing as shown on the contract list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    PaidOff,
    InProgress,
    NotStarted,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

impl Contract {
    /// Build a contract record from a computed quote.
    pub fn from_quote(
        contract_no: impl Into<String>,
        client_name: impl Into<String>,
        quote: &LoanResult,
        created_at: NaiveDate,
    ) -> Self {
        Contract {
            contract_no: contract_no.into(),
            client_name: client_name.into(),
            otr: quote.otr,
            dp: quote.dp,
            tenor_months: quote.tenor_months,
            interest_rate_percent: quote.interest_rate_percent,
            monthly_installment: quote.monthly_installment,
            created_at,
        }
    }
}

/// Generate the full schedule for a contract, all entries unpaid.
///
/// Each due date is `first_due_date` plus n calendar months, clamped to the
/// end of shorter months. Always offsetting from the first due date keeps a
/// month-end anchor from drifting after a clamp (31 Jan, 28 Feb, 31 Mar).
pub fn build_schedule(
    contract: &Contract,
    first_due_date: NaiveDate,
) -> CicilanResult<Vec<ScheduledInstallment>> {
    let mut schedule = Vec::with_capacity(contract.tenor_months as usize);
    for n in 0..contract.tenor_months {
        let due_date = first_due_date
            .checked_add_months(Months::new(n))
            .ok_or_else(|| {
                CicilanError::DateError(format!("due date out of range at installment {}", n + 1))
            })?;
        schedule.push(ScheduledInstallment {
            installment_no: n + 1,
            amount: contract.monthly_installment,
            due_date,
            status: InstallmentStatus::Unpaid,
        });
    }
    Ok(schedule)
}

/// Count paid/unpaid installments and derive the progress percentage.
pub fn payment_progress(installments: &[ScheduledInstallment]) -> PaymentProgress {
    let paid = installments
        .iter()
        .filter(|i| i.status == InstallmentStatus::Paid)
        .count() as u32;
    let unpaid = installments.len() as u32 - paid;

    let progress_percent = if paid + unpaid == 0 {
        0
    } else {
        (Decimal::from(paid) * dec!(100) / Decimal::from(paid + unpaid))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(0)
    };

    PaymentProgress {
        paid,
        unpaid,
        progress_percent,
    }
}

impl PaymentProgress {
    /// Standing badge: nothing left unpaid means paid off, nothing paid yet
    /// means not started, anything else is in progress.
    pub fn status(&self) -> ContractStatus {
        if self.unpaid == 0 {
            ContractStatus::PaidOff
        } else if self.paid == 0 {
            ContractStatus::NotStarted
        } else {
            ContractStatus::InProgress
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
