//! Form-level validation for installment calculation inputs.
//!
//! Mirrors the checks the front office applies before a contract is quoted.
//! Every rule is evaluated independently so a badly filled form reports all
//! of its problems in one pass, one message per field. Messages are the
//! clerk-facing Indonesian strings shown next to the form fields.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Longest tenor the office writes contracts for, in months.
pub const MAX_TENOR_MONTHS: u32 = 60;

/// Per-field validation outcome. Empty map means the input is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub field_errors: BTreeMap<String, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    fn reject(&mut self, field: &str, message: &str) {
        self.field_errors.insert(field.to_string(), message.to_string());
    }
}

/// Validate the three computational loan inputs.
///
/// `None` models a field left blank on the form. Later rules for the same
/// field overwrite earlier ones: `dp >= otr` wins over the non-negative
/// message, and the tenor cap wins over the presence message whenever the
/// value is positive but above [`MAX_TENOR_MONTHS`].
pub fn validate_loan_input(
    otr: Option<Money>,
    dp: Option<Money>,
    tenor_months: Option<u32>,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    match otr {
        Some(v) if v > Decimal::ZERO => {}
        _ => report.reject("otr", "OTR harus diisi dan lebih besar dari 0"),
    }

    match dp {
        Some(v) if v >= Decimal::ZERO => {}
        _ => report.reject("dp", "DP tidak boleh negatif"),
    }

    if let (Some(otr), Some(dp)) = (otr, dp) {
        if dp >= otr {
            report.reject("dp", "DP tidak boleh lebih besar atau sama dengan OTR");
        }
    }

    match tenor_months {
        Some(v) if v > 0 => {}
        _ => report.reject("tenor_months", "Jangka waktu harus diisi dan lebih besar dari 0"),
    }

    if let Some(v) = tenor_months {
        if v > MAX_TENOR_MONTHS {
            report.reject("tenor_months", "Jangka waktu maksimal 60 bulan");
        }
    }

    report
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    // -----------------------------------------------------------------------
    // 1. Fully valid input
    // -----------------------------------------------------------------------
    #[test]
    fn test_valid_input_passes() {
        let report = validate_loan_input(Some(dec!(240_000_000)), Some(dec!(48_000_000)), Some(18));
        assert!(report.is_valid(), "expected no errors, got {:?}", report.field_errors);
    }

    // -----------------------------------------------------------------------
    // 2. Missing OTR
    // -----------------------------------------------------------------------
    #[test]
    fn test_missing_otr_rejected() {
        let report = validate_loan_input(None, Some(dec!(48_000_000)), Some(18));
        assert!(!report.is_valid());
        assert_eq!(
            report.error_for("otr"),
            Some("OTR harus diisi dan lebih besar dari 0")
        );
    }

    // -----------------------------------------------------------------------
    // 3. Zero OTR rejected the same way as missing
    // -----------------------------------------------------------------------
    #[test]
    fn test_zero_otr_rejected() {
        let report = validate_loan_input(Some(Decimal::ZERO), Some(Decimal::ZERO), Some(12));
        assert!(report.error_for("otr").is_some());
    }

    // -----------------------------------------------------------------------
    // 4. Negative DP
    // -----------------------------------------------------------------------
    #[test]
    fn test_negative_dp_rejected() {
        let report = validate_loan_input(Some(dec!(100_000_000)), Some(dec!(-1)), Some(12));
        assert_eq!(report.error_for("dp"), Some("DP tidak boleh negatif"));
    }

    // -----------------------------------------------------------------------
    // 5. Zero DP is acceptable
    // -----------------------------------------------------------------------
    #[test]
    fn test_zero_dp_accepted() {
        let report = validate_loan_input(Some(dec!(100_000_000)), Some(Decimal::ZERO), Some(12));
        assert!(report.is_valid(), "zero down payment is a valid contract");
    }

    // -----------------------------------------------------------------------
    // 6. DP equal to OTR (worked example 4)
    // -----------------------------------------------------------------------
    #[test]
    fn test_dp_equal_to_otr_rejected() {
        let report =
            validate_loan_input(Some(dec!(100_000_000)), Some(dec!(100_000_000)), Some(12));
        assert!(!report.is_valid());
        assert_eq!(
            report.error_for("dp"),
            Some("DP tidak boleh lebih besar atau sama dengan OTR")
        );
    }

    // -----------------------------------------------------------------------
    // 7. DP above OTR rejected no matter how large OTR is
    // -----------------------------------------------------------------------
    #[test]
    fn test_dp_above_otr_rejected_at_any_scale() {
        let report = validate_loan_input(
            Some(dec!(9_999_999_999_999)),
            Some(dec!(10_000_000_000_000)),
            Some(12),
        );
        assert_eq!(
            report.error_for("dp"),
            Some("DP tidak boleh lebih besar atau sama dengan OTR")
        );
    }

    // -----------------------------------------------------------------------
    // 8. The dp >= otr message overrides the non-negative one
    // -----------------------------------------------------------------------
    #[test]
    fn test_dp_comparison_message_wins() {
        // DP is present and non-negative, so only the comparison rule fires.
        let report =
            validate_loan_input(Some(dec!(50_000_000)), Some(dec!(60_000_000)), Some(12));
        assert_eq!(report.field_errors.len(), 1);
        assert_eq!(
            report.error_for("dp"),
            Some("DP tidak boleh lebih besar atau sama dengan OTR")
        );
    }

    // -----------------------------------------------------------------------
    // 9. Missing and zero tenor
    // -----------------------------------------------------------------------
    #[test]
    fn test_missing_tenor_rejected() {
        let report = validate_loan_input(Some(dec!(100_000_000)), Some(dec!(10_000_000)), None);
        assert_eq!(
            report.error_for("tenor_months"),
            Some("Jangka waktu harus diisi dan lebih besar dari 0")
        );

        let report = validate_loan_input(Some(dec!(100_000_000)), Some(dec!(10_000_000)), Some(0));
        assert_eq!(
            report.error_for("tenor_months"),
            Some("Jangka waktu harus diisi dan lebih besar dari 0")
        );
    }

    // -----------------------------------------------------------------------
    // 10. Tenor above the cap: the cap message supersedes the presence one
    // -----------------------------------------------------------------------
    #[test]
    fn test_tenor_above_cap_rejected() {
        let report = validate_loan_input(Some(dec!(100_000_000)), Some(dec!(10_000_000)), Some(61));
        assert_eq!(
            report.error_for("tenor_months"),
            Some("Jangka waktu maksimal 60 bulan")
        );
    }

    // -----------------------------------------------------------------------
    // 11. Tenor exactly at the cap is fine
    // -----------------------------------------------------------------------
    #[test]
    fn test_tenor_at_cap_accepted() {
        let report = validate_loan_input(Some(dec!(100_000_000)), Some(dec!(10_000_000)), Some(60));
        assert!(report.is_valid());
    }

    // -----------------------------------------------------------------------
    // 12. Multiple fields reported simultaneously
    // -----------------------------------------------------------------------
    #[test]
    fn test_multiple_errors_reported_together() {
        let report = validate_loan_input(None, Some(dec!(-5)), Some(0));
        assert_eq!(report.field_errors.len(), 3);
        assert!(report.error_for("otr").is_some());
        assert!(report.error_for("dp").is_some());
        assert!(report.error_for("tenor_months").is_some());
    }
}
