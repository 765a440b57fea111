//! Money coercion using decimal arithmetic.
//!
//! Shopify sends monetary amounts as decimal strings. Everything that reaches
//! the domain types goes through [`parse_amount`] or [`normalize_amount`], so
//! a missing, malformed or negative amount becomes zero instead of leaking
//! into the UI as garbage.

use rust_decimal::Decimal;

/// Canonical zero amount string.
pub const ZERO_AMOUNT: &str = "0.00";

/// Parse a wire amount into a non-negative decimal.
///
/// Returns zero for `None`, empty, unparseable or negative input.
#[must_use]
pub fn parse_amount(raw: Option<&str>) -> Decimal {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<Decimal>().ok())
        .filter(|d| !d.is_sign_negative())
        .unwrap_or(Decimal::ZERO)
}

/// Normalize a wire amount into a decimal string.
///
/// Valid amounts keep their wire precision (`"10.5"` stays `"10.5"`,
/// `"10.50"` stays `"10.50"`). Anything [`parse_amount`] would coerce to
/// zero becomes [`ZERO_AMOUNT`].
#[must_use]
pub fn normalize_amount(raw: Option<&str>) -> String {
    let amount = parse_amount(raw);
    if amount.is_zero() {
        ZERO_AMOUNT.to_string()
    } else {
        amount.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_valid() {
        assert_eq!(parse_amount(Some("19.99")), Decimal::new(1999, 2));
    }

    #[test]
    fn test_parse_amount_missing_is_zero() {
        assert_eq!(parse_amount(None), Decimal::ZERO);
        assert_eq!(parse_amount(Some("")), Decimal::ZERO);
        assert_eq!(parse_amount(Some("   ")), Decimal::ZERO);
    }

    #[test]
    fn test_parse_amount_garbage_is_zero() {
        assert_eq!(parse_amount(Some("NaN")), Decimal::ZERO);
        assert_eq!(parse_amount(Some("abc")), Decimal::ZERO);
    }

    #[test]
    fn test_parse_amount_negative_is_zero() {
        assert_eq!(parse_amount(Some("-5.00")), Decimal::ZERO);
    }

    #[test]
    fn test_normalize_amount_keeps_precision() {
        assert_eq!(normalize_amount(Some("10.50")), "10.50");
        assert_eq!(normalize_amount(Some("7")), "7");
        assert_eq!(normalize_amount(Some("0.125")), "0.125");
    }

    #[test]
    fn test_normalize_amount_defaults() {
        assert_eq!(normalize_amount(None), ZERO_AMOUNT);
        assert_eq!(normalize_amount(Some("oops")), ZERO_AMOUNT);
        assert_eq!(normalize_amount(Some("0")), ZERO_AMOUNT);
    }
}
