//! Wire types for order REST responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::serde_util::lenient_timestamp;

/// `GET /api/orders/track/{orderNumber}` response body.
///
/// Money fields arrive as decimal strings. Timestamps are informational and
/// never fail the record.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub order_number: String,
    pub status: String,
    pub subtotal: String,
    pub tax: String,
    pub shipping_cost: String,
    pub discount: String,
    pub total: String,
    #[serde(default, deserialize_with = "lenient_timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp::deserialize")]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub shipping_address_id: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItemResponse>,
}

/// A single order line.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub product_name: String,
    #[serde(default)]
    pub variant_name: Option<String>,
    pub quantity: u32,
    pub price: String,
    pub total: String,
}
