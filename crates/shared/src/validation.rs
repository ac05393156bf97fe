//! Common validation utilities.

use validator::ValidationError;

lazy_static::lazy_static! {
    /// Pragmatic email shape check: one `@`, a non-empty local part and a
    /// dotted domain. Full RFC 5321 parsing is deliberately out of scope.
    pub static ref EMAIL_REGEX: regex::Regex =
        regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Returns whether a string looks like an email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Validates that a monetary amount is non-negative.
pub fn validate_amount(amount: f64) -> Result<(), ValidationError> {
    if amount >= 0.0 && amount.is_finite() {
        Ok(())
    } else {
        let mut err = ValidationError::new("amount_range");
        err.message = Some("Amount must be a non-negative number".into());
        Err(err)
    }
}

/// Validates that a VAT percentage is within valid range (0 to 100).
pub fn validate_vat_percentage(vat: f64) -> Result<(), ValidationError> {
    if (0.0..=100.0).contains(&vat) {
        Ok(())
    } else {
        let mut err = ValidationError::new("vat_range");
        err.message = Some("VAT percentage must be between 0 and 100".into());
        Err(err)
    }
}

/// Validates that a currency code is a 3-letter uppercase ISO-like code.
pub fn validate_currency_code(code: &str) -> Result<(), ValidationError> {
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("currency_code");
        err.message = Some("Currency must be a 3-letter uppercase code".into());
        Err(err)
    }
}
