//! Shared newtypes and utilities used across all domain modules.
//!
//! The identifier types are serialization-transparent: they serialize and
//! deserialize as plain JSON strings, so they can be used directly in wire
//! types without conversion overhead.

pub mod fmt;
pub mod query;
pub mod serde_util;

pub use query::order_number_from_query;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::error::SdkError;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name(s.to_string()))
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok($name(s))
            }
        }
    };
}

// ─── Identifiers ─────────────────────────────────────────────────────────────

string_id! {
    /// Internal order identifier, used to look up the order's payment.
    OrderId
}

string_id! {
    /// Human-facing order number (e.g. `"ORD-1001"`), used for customer lookups.
    OrderNumber
}

string_id! {
    /// Shipping address identifier.
    AddressId
}

// ─── Utilities ───────────────────────────────────────────────────────────────

/// Parse a decimal-as-text money field.
///
/// `field` names the offending field in the validation error.
pub fn parse_money(field: &str, raw: &str) -> Result<Decimal, SdkError> {
    Decimal::from_str(raw.trim())
        .map_err(|e| SdkError::Validation(format!("invalid {} '{}': {}", field, raw, e)))
}
