//! Order domain — a placed order and its line items.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::{AddressId, OrderId, OrderNumber};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Order ───────────────────────────────────────────────────────────────────

/// A validated, domain-level order snapshot.
///
/// `total` is expected to equal `subtotal + tax + shipping_cost - discount`;
/// nothing here checks it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub order_number: OrderNumber,
    pub status: String,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub shipping_cost: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    /// `None` when the backend sent no usable timestamp.
    pub created_at: Option<DateTime<Utc>>,
    pub paid_at: Option<DateTime<Utc>>,
    pub shipping_address_id: Option<AddressId>,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Tax is only shown when it is strictly positive.
    pub fn has_tax(&self) -> bool {
        self.tax > Decimal::ZERO
    }

    /// Discount is only shown when it is strictly positive.
    pub fn has_discount(&self) -> bool {
        self.discount > Decimal::ZERO
    }

    pub fn has_free_shipping(&self) -> bool {
        self.shipping_cost.is_zero()
    }
}

// ─── OrderItem ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_name: String,
    pub variant_name: Option<String>,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total: Decimal,
}
