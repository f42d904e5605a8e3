//! Display formatting for rupiah amounts, plain numbers, and dates.
//!
//! Presentation only: comparisons and arithmetic always happen on the raw
//! `Decimal`/`NaiveDate` values, and these helpers are the final display
//! step. Amounts render in the id-ID convention (`.` thousands grouping,
//! `,` decimal mark); rounding to whole rupiah happens here and nowhere
//! earlier.

use chrono::{Locale, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::types::Money;

/// Rupiah with zero decimal places, e.g. `Rp 12.160.000`.
///
/// A missing amount renders as the zero string, not an error.
pub fn format_currency(amount: Option<Money>) -> String {
    let amount = amount.unwrap_or(Decimal::ZERO);
    let whole = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let grouped = group_thousands(&whole.abs().to_string());
    if whole < Decimal::ZERO {
        format!("-Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

/// Thousands-grouped number without a currency symbol, e.g. `240.000.000`.
pub fn format_number(value: Option<Decimal>) -> String {
    let value = match value {
        Some(v) => v,
        None => return "0".to_string(),
    };

    let text = value.abs().normalize().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::new();
    if value < Decimal::ZERO {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

/// `DD <full month name> YYYY` in the id-ID display locale; a missing date
/// renders as a single dash.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format_localized("%d %B %Y", Locale::id_ID).to_string(),
        None => "-".to_string(),
    }
}

/// Parse a clerk-typed amount, tolerating grouping dots, the `Rp` prefix,
/// and stray characters. Everything but digits is discarded; an empty or
/// unparseable remainder is zero.
pub fn parse_currency(value: &str) -> Money {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&digits).unwrap_or(Decimal::ZERO)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // -----------------------------------------------------------------------
    // 1. Whole rupiah amounts group with dots
    // -----------------------------------------------------------------------
    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(Some(dec!(12_160_000))), "Rp 12.160.000");
        assert_eq!(format_currency(Some(dec!(243_200))), "Rp 243.200");
        assert_eq!(format_currency(Some(dec!(950))), "Rp 950");
        assert_eq!(format_currency(Some(dec!(1_000))), "Rp 1.000");
    }

    // -----------------------------------------------------------------------
    // 2. Fractions round to whole rupiah only at display time
    // -----------------------------------------------------------------------
    #[test]
    fn test_currency_rounds_to_whole_units() {
        // The 48-month quote figure.
        let monthly = dec!(233_000_000) / dec!(48);
        assert_eq!(format_currency(Some(monthly)), "Rp 4.854.167");
        assert_eq!(format_currency(Some(dec!(0.4))), "Rp 0");
        assert_eq!(format_currency(Some(dec!(0.5))), "Rp 1");
    }

    // -----------------------------------------------------------------------
    // 3. Missing amount is the zero string
    // -----------------------------------------------------------------------
    #[test]
    fn test_currency_missing_is_zero() {
        assert_eq!(format_currency(None), "Rp 0");
        assert_eq!(format_currency(Some(Decimal::ZERO)), "Rp 0");
    }

    // -----------------------------------------------------------------------
    // 4. Negative amounts keep the sign ahead of the symbol
    // -----------------------------------------------------------------------
    #[test]
    fn test_currency_negative() {
        assert_eq!(format_currency(Some(dec!(-500_000))), "-Rp 500.000");
    }

    // -----------------------------------------------------------------------
    // 5. Plain numbers group without a symbol
    // -----------------------------------------------------------------------
    #[test]
    fn test_number_grouping() {
        assert_eq!(format_number(Some(dec!(240_000_000))), "240.000.000");
        assert_eq!(format_number(Some(dec!(48_000_000))), "48.000.000");
        assert_eq!(format_number(Some(dec!(18))), "18");
        assert_eq!(format_number(None), "0");
    }

    // -----------------------------------------------------------------------
    // 6. Fractional numbers use the id-ID decimal comma
    // -----------------------------------------------------------------------
    #[test]
    fn test_number_decimal_comma() {
        assert_eq!(format_number(Some(dec!(16.5))), "16,5");
        assert_eq!(format_number(Some(dec!(-1_234.56))), "-1.234,56");
    }

    // -----------------------------------------------------------------------
    // 7. Dates render day, full Indonesian month name, year
    // -----------------------------------------------------------------------
    #[test]
    fn test_date_formatting() {
        assert_eq!(format_date(Some(date(2024, 8, 14))), "14 Agustus 2024");
        assert_eq!(format_date(Some(date(2024, 1, 5))), "05 Januari 2024");
        assert_eq!(format_date(Some(date(2023, 12, 25))), "25 Desember 2023");
    }

    // -----------------------------------------------------------------------
    // 8. Missing date is a dash
    // -----------------------------------------------------------------------
    #[test]
    fn test_date_missing_is_dash() {
        assert_eq!(format_date(None), "-");
    }

    // -----------------------------------------------------------------------
    // 9. Parsing strips grouping, prefixes, and stray characters
    // -----------------------------------------------------------------------
    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("240.000.000"), dec!(240_000_000));
        assert_eq!(parse_currency("Rp 48.000.000"), dec!(48_000_000));
        assert_eq!(parse_currency("12,160,000"), dec!(12_160_000));
        assert_eq!(parse_currency(""), Decimal::ZERO);
        assert_eq!(parse_currency("abc"), Decimal::ZERO);
    }

    // -----------------------------------------------------------------------
    // 10. Formatting round-trips through parsing for whole amounts
    // -----------------------------------------------------------------------
    #[test]
    fn test_parse_inverts_format() {
        let amount = dec!(218_880_000);
        assert_eq!(parse_currency(&format_currency(Some(amount))), amount);
        assert_eq!(parse_currency(&format_number(Some(amount))), amount);
    }
}
