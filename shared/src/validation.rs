//! Validation utilities for the K2N ledger
//!
//! Field-level checks shared by the backend input handling and the frontend.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::reporting::DATE_FORMAT;

// ============================================================================
// Amount Validations
// ============================================================================

/// Validate that a monetary amount or quantity is strictly positive
pub fn validate_positive_amount(amount: Decimal) -> Result<(), &'static str> {
    if amount <= Decimal::ZERO {
        return Err("Amount must be positive");
    }
    Ok(())
}

/// Validate that an amount is zero or positive (fees, received payments)
pub fn validate_non_negative_amount(amount: Decimal) -> Result<(), &'static str> {
    if amount < Decimal::ZERO {
        return Err("Amount cannot be negative");
    }
    Ok(())
}

/// Validate stock thresholds (0 <= min <= max)
pub fn validate_stock_thresholds(seuil_min: i32, seuil_max: i32) -> Result<(), &'static str> {
    if seuil_min < 0 || seuil_max < 0 {
        return Err("Stock thresholds cannot be negative");
    }
    if seuil_min > seuil_max {
        return Err("Minimum threshold cannot exceed maximum threshold");
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Parse a `YYYY-MM-DD` date as sent by the frontend
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, &'static str> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| "Date must use the YYYY-MM-DD format")
}

/// Validate phone number (8 to 15 digits, optional leading +, spaces and dashes allowed)
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    let trimmed = phone.trim();
    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if !body.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-') {
        return Err("Phone number may only contain digits, spaces and dashes");
    }
    let digits = body.chars().filter(|c| c.is_ascii_digit()).count();
    if !(8..=15).contains(&digits) {
        return Err("Phone number must have between 8 and 15 digits");
    }
    Ok(())
}

/// Validate a free-text name field is not blank
pub fn validate_not_blank(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Value cannot be blank");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_validate_positive_amount() {
        assert!(validate_positive_amount(dec("0.01")).is_ok());
        assert!(validate_positive_amount(Decimal::ZERO).is_err());
        assert!(validate_positive_amount(dec("-5")).is_err());
    }

    #[test]
    fn test_validate_stock_thresholds() {
        assert!(validate_stock_thresholds(10, 100).is_ok());
        assert!(validate_stock_thresholds(10, 10).is_ok());
        assert!(validate_stock_thresholds(50, 10).is_err());
        assert!(validate_stock_thresholds(-1, 10).is_err());
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_iso_date("2025-07-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
        );
        assert!(parse_iso_date("01/07/2025").is_err());
        assert!(parse_iso_date("2025-13-01").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+225 07 08 09 10 11").is_ok());
        assert!(validate_phone("0708-091011").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("07 08 ab 10").is_err());
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Riz").is_ok());
        assert!(validate_not_blank("   ").is_err());
    }
}
