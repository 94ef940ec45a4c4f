//! Money calculation utilities using rust_decimal for precision
//!
//! Prices travel as `f64` on the wire. Arithmetic happens in `Decimal`, then
//! the result is rounded to 2 places and converted back.

use rust_decimal::prelude::*;

use crate::error::{AppError, AppResult, ErrorCode};

/// Rounding precision for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed unit price
pub const MAX_PRICE: f64 = 100_000.0;
/// Maximum allowed quantity per line
pub const MAX_QUANTITY: u32 = 999;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// A unit price must be finite, strictly positive and below [`MAX_PRICE`]
pub fn validate_price(value: f64, field_name: &str) -> AppResult<()> {
    if !value.is_finite() || value <= 0.0 || value > MAX_PRICE {
        return Err(AppError::new(ErrorCode::InvalidPrice)
            .with_detail("field", field_name)
            .with_detail("value", value));
    }
    Ok(())
}

/// Parse a price typed into a form field
pub fn parse_price(input: &str, field_name: &str) -> AppResult<f64> {
    let value = Decimal::from_str(input.trim())
        .ok()
        .and_then(|d| d.to_f64())
        .ok_or_else(|| AppError::new(ErrorCode::InvalidPrice).with_detail("field", field_name))?;
    validate_price(value, field_name)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        let sum_f64 = 0.1_f64 + 0.2_f64;
        assert_ne!(sum_f64, 0.3);
        assert_eq!(to_f64(to_decimal(0.1) + to_decimal(0.2)), 0.3);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(" 120 ", "full"), Ok(120.0));
        assert_eq!(parse_price("62.50", "half"), Ok(62.5));
        assert_eq!(parse_price("0", "riceOnly").unwrap_err().code, ErrorCode::InvalidPrice);
        assert!(parse_price("-5", "full").is_err());
        assert!(parse_price("abc", "full").is_err());
        assert!(parse_price("", "full").is_err());
    }

    #[test]
    fn test_validate_price_rejects_non_finite() {
        assert!(validate_price(f64::NAN, "full").is_err());
        assert!(validate_price(f64::INFINITY, "full").is_err());
        assert!(validate_price(MAX_PRICE + 1.0, "full").is_err());
        assert!(validate_price(40.0, "riceOnly").is_ok());
    }
}
