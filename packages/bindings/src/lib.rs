use chrono::NaiveDate;
use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

use cicilan_core::schedule::ContractSchedule;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Installment quotes
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_installment(input_json: String) -> NapiResult<String> {
    let input: cicilan_core::installment::LoanInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        cicilan_core::installment::calculate_installment(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[derive(Deserialize)]
struct ValidateRequest {
    otr: Option<Decimal>,
    dp: Option<Decimal>,
    tenor_months: Option<u32>,
}

#[napi]
pub fn validate_loan_input(input_json: String) -> NapiResult<String> {
    let request: ValidateRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let report = cicilan_core::validation::validate_loan_input(
        request.otr,
        request.dp,
        request.tenor_months,
    );
    serde_json::to_string(&report).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Penalties
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct PenaltyRequest {
    installment_amount: Decimal,
    due_date: NaiveDate,
    evaluation_date: NaiveDate,
}

#[napi]
pub fn compute_penalty(input_json: String) -> NapiResult<String> {
    let request: PenaltyRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let breakdown = cicilan_core::penalty::compute_penalty(
        request.installment_amount,
        request.due_date,
        request.evaluation_date,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&breakdown).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Portfolio reports
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ReportRequest {
    dataset: Vec<ContractSchedule>,
    client_name: String,
    date: NaiveDate,
}

#[napi]
pub fn due_summary(input_json: String) -> NapiResult<String> {
    let request: ReportRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        cicilan_core::reports::due_summary(&request.dataset, &request.client_name, request.date)
            .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn penalty_report(input_json: String) -> NapiResult<String> {
    let request: ReportRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = cicilan_core::reports::penalty_report(
        &request.dataset,
        &request.client_name,
        request.date,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
