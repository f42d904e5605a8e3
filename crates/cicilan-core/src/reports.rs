//! Canned portfolio queries: amounts fallen due and late-payment penalties.
//!
//! Both reports scan a dataset of [`ContractSchedule`] rows for one client
//! up to a cutoff date. The due summary counts every installment that has
//! fallen due regardless of payment status; the penalty report looks only at
//! unpaid ones.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::CicilanError;
use crate::penalty::{compute_penalty, summarize_penalties, PenaltySummary};
use crate::schedule::{ContractSchedule, InstallmentStatus};
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::CicilanResult;

// ---------------------------------------------------------------------------
// Output Types
// ---------------------------------------------------------------------------

/// One contract's total fallen due as of the cutoff date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueSummaryRow {
    pub contract_no: String,
    pub client_name: String,
    pub total_due: Money,
}

/// Per-contract totals of installments fallen due, largest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueSummaryReport {
    pub rows: Vec<DueSummaryRow>,
    pub total_due: Money,
}

/// One overdue unpaid installment with its accrued penalty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyRow {
    pub contract_no: String,
    pub client_name: String,
    pub installment_no: u32,
    pub days_overdue: u32,
    pub penalty_amount: Money,
}

/// Overdue unpaid installments with penalties and aggregate figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyReport {
    pub rows: Vec<PenaltyRow>,
    pub summary: PenaltySummary,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Total installment amounts fallen due per contract for one client.
///
/// An installment counts once its due date is on or before `cutoff`,
/// whether or not it has been paid. Contracts with nothing due produce no
/// row. Rows are ordered by total due, descending.
pub fn due_summary(
    dataset: &[ContractSchedule],
    client_name: &str,
    cutoff: NaiveDate,
) -> CicilanResult<ComputationOutput<DueSummaryReport>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    ensure_client_name(client_name)?;

    let mut rows: Vec<DueSummaryRow> = Vec::new();
    for entry in dataset {
        if entry.contract.client_name != client_name {
            continue;
        }
        let total: Money = entry
            .installments
            .iter()
            .filter(|i| i.due_date <= cutoff)
            .map(|i| i.amount)
            .sum();
        if total > Decimal::ZERO {
            rows.push(DueSummaryRow {
                contract_no: entry.contract.contract_no.clone(),
                client_name: entry.contract.client_name.clone(),
                total_due: total,
            });
        }
    }

    rows.sort_by(|a, b| b.total_due.cmp(&a.total_due));
    let total_due: Money = rows.iter().map(|r| r.total_due).sum();

    if rows.is_empty() {
        warnings.push(format!(
            "No installments fallen due for client '{client_name}' up to {cutoff}"
        ));
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Due summary — installments fallen due per contract, any payment status",
        &serde_json::json!({
            "client_name": client_name,
            "cutoff": cutoff.to_string(),
            "contracts_scanned": dataset.len(),
        }),
        warnings,
        elapsed,
        DueSummaryReport { rows, total_due },
    ))
}

/// Late-payment penalties for one client's unpaid installments.
///
/// Only unpaid installments with a due date on or before `cutoff` appear.
/// Rows are ordered by contract number, then installment number.
pub fn penalty_report(
    dataset: &[ContractSchedule],
    client_name: &str,
    cutoff: NaiveDate,
) -> CicilanResult<ComputationOutput<PenaltyReport>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    ensure_client_name(client_name)?;

    let mut rows: Vec<PenaltyRow> = Vec::new();
    for entry in dataset {
        if entry.contract.client_name != client_name {
            continue;
        }
        for installment in &entry.installments {
            if installment.status != InstallmentStatus::Unpaid
                || installment.due_date > cutoff
            {
                continue;
            }
            let breakdown = compute_penalty(installment.amount, installment.due_date, cutoff)?;
            rows.push(PenaltyRow {
                contract_no: entry.contract.contract_no.clone(),
                client_name: entry.contract.client_name.clone(),
                installment_no: installment.installment_no,
                days_overdue: breakdown.days_overdue,
                penalty_amount: breakdown.penalty_amount,
            });
        }
    }

    rows.sort_by(|a, b| {
        a.contract_no
            .cmp(&b.contract_no)
            .then(a.installment_no.cmp(&b.installment_no))
    });

    let breakdowns: Vec<_> = rows
        .iter()
        .map(|r| crate::penalty::PenaltyBreakdown {
            days_overdue: r.days_overdue,
            penalty_amount: r.penalty_amount,
        })
        .collect();
    let summary = summarize_penalties(&breakdowns);

    if rows.is_empty() {
        warnings.push(format!(
            "No unpaid installments overdue for client '{client_name}' as of {cutoff}"
        ));
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Penalty report — 0.1% of installment amount per day overdue, unpaid only",
        &serde_json::json!({
            "client_name": client_name,
            "cutoff": cutoff.to_string(),
            "contracts_scanned": dataset.len(),
        }),
        warnings,
        elapsed,
        PenaltyReport { rows, summary },
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn ensure_client_name(client_name: &str) -> CicilanResult<()> {
    if client_name.trim().is_empty() {
        return Err(CicilanError::InvalidInput {
            field: "client_name".into(),
            reason: "Client name must not be empty".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
