//! Payment details card view.

use std::fmt;

use super::{Payment, PaymentStatus, StatusConfig};
use crate::shared::fmt::DisplayConfig;

/// Render-ready payment details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentCard {
    pub status: PaymentStatus,
    pub config: StatusConfig,
    pub accent_class: &'static str,
    /// Method with each word capitalized.
    pub method: String,
    pub amount: String,
    /// Shown in a monospace block when present.
    pub transaction_id: Option<String>,
    pub processed_on: String,
}

impl PaymentCard {
    pub fn new(payment: &Payment, display: &DisplayConfig) -> Self {
        Self {
            config: payment.status.config(),
            accent_class: payment.status.accent_class(),
            status: payment.status.clone(),
            method: capitalize_words(&payment.method),
            amount: display.price(&payment.amount),
            transaction_id: payment.transaction_id.clone(),
            processed_on: display.date(&payment.created_at),
        }
    }
}

impl fmt::Display for PaymentCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Payment Details  [{} {}]",
            self.config.icon.glyph(),
            self.config.label
        )?;
        writeln!(f, "  Method:  {}", self.method)?;
        writeln!(f, "  Amount:  {}", self.amount)?;
        if let Some(txn) = &self.transaction_id {
            writeln!(f, "  Transaction ID:")?;
            writeln!(f, "    `{}`", txn)?;
        }
        writeln!(f, "  Payment processed on {}", self.processed_on)
    }
}

/// Upper-case the first letter of every whitespace-separated word, leaving
/// the rest untouched.
fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            at_word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}
