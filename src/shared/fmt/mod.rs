//! Display formatting: money, dates, digit grouping.

pub mod currency;
pub mod date;
pub mod num;

use chrono::{FixedOffset, Offset, Utc};

pub use currency::{format_price, format_price_with, shipping_label, FREE_LABEL};
pub use date::long_date_time;

/// Locale-ish settings applied when rendering views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Currency symbol prefixed to amounts.
    pub currency_symbol: String,
    /// Offset dates are shown in.
    pub utc_offset: FixedOffset,
}

impl DisplayConfig {
    pub fn price(&self, value: &rust_decimal::Decimal) -> String {
        format_price_with(value, &self.currency_symbol)
    }

    pub fn date(&self, ts: &chrono::DateTime<chrono::Utc>) -> String {
        long_date_time(ts, self.utc_offset)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: currency::DEFAULT_SYMBOL.to_string(),
            utc_offset: Utc.fix(),
        }
    }
}
