//! Payment domain — the payment record attached to an order and its
//! status presentation.

pub mod card;
#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod status;
pub mod wire;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use card::PaymentCard;
pub use status::{BadgeVariant, StatusConfig, StatusIcon, StatusTone};

// ─── PaymentStatus ───────────────────────────────────────────────────────────

/// Payment status as reported by the backend.
///
/// The backend declares a closed set, but any other value is kept verbatim
/// in `Unknown` instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
    Unknown(String),
}

impl PaymentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Completed => "COMPLETED",
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Failed => "FAILED",
            PaymentStatus::Unknown(raw) => raw,
        }
    }
}

impl From<&str> for PaymentStatus {
    fn from(s: &str) -> Self {
        match s {
            "COMPLETED" => PaymentStatus::Completed,
            "PENDING" => PaymentStatus::Pending,
            "FAILED" => PaymentStatus::Failed,
            other => PaymentStatus::Unknown(other.to_string()),
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(s: String) -> Self {
        PaymentStatus::from(s.as_str())
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Payment ─────────────────────────────────────────────────────────────────

/// A validated payment record. At most one exists per order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: String,
    pub method: String,
    pub transaction_id: Option<String>,
    pub amount: Decimal,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}
