//! Currency formatting for `rust_decimal::Decimal` money values.
//!
//! Amounts render the way an en-US currency formatter does: symbol prefix,
//! thousands separators, exactly two fraction digits, half-away-from-zero
//! rounding and a leading minus for negative values (`-$1,234.50`).

use rust_decimal::prelude::*;

use super::num::group_thousands;

/// Default currency symbol.
pub const DEFAULT_SYMBOL: &str = "$";

/// Label shown instead of a zero shipping cost.
pub const FREE_LABEL: &str = "FREE";

/// Format a money value with the default `$` symbol.
pub fn format_price(value: &Decimal) -> String {
    format_price_with(value, DEFAULT_SYMBOL)
}

/// Format a money value with an explicit currency symbol.
pub fn format_price_with(value: &Decimal, symbol: &str) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded.set_sign_positive(true);
    rounded.rescale(2);

    let body = group_thousands(&rounded.to_string());
    if negative {
        format!("-{}{}", symbol, body)
    } else {
        format!("{}{}", symbol, body)
    }
}

/// Shipping cost label: `FREE` for zero, otherwise a formatted amount.
pub fn shipping_label(cost: &Decimal, symbol: &str) -> String {
    if cost.is_zero() {
        FREE_LABEL.to_string()
    } else {
        format_price_with(cost, symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_price_basic() {
        assert_eq!(format_price(&dec("19.99")), "$19.99");
        assert_eq!(format_price(&dec("0")), "$0.00");
        assert_eq!(format_price(&dec("5")), "$5.00");
        assert_eq!(format_price(&dec("5.5")), "$5.50");
    }

    #[test]
    fn test_format_price_grouping() {
        assert_eq!(format_price(&dec("1234.5")), "$1,234.50");
        assert_eq!(format_price(&dec("1000000")), "$1,000,000.00");
    }

    #[test]
    fn test_format_price_rounding() {
        assert_eq!(format_price(&dec("1.005")), "$1.01");
        assert_eq!(format_price(&dec("1.004")), "$1.00");
        assert_eq!(format_price(&dec("999.999")), "$1,000.00");
    }

    #[test]
    fn test_format_price_negative() {
        assert_eq!(format_price(&dec("-1234.56")), "-$1,234.56");
        assert_eq!(format_price(&dec("-0.001")), "$0.00");
    }

    #[test]
    fn test_format_price_with_symbol() {
        assert_eq!(format_price_with(&dec("10"), "€"), "€10.00");
    }

    #[test]
    fn test_shipping_label() {
        assert_eq!(shipping_label(&dec("0.00"), "$"), "FREE");
        assert_eq!(shipping_label(&dec("4.99"), "$"), "$4.99");
    }
}
