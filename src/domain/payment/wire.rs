//! Wire types for payment REST responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `GET /api/payments/order/{orderId}` response body.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub transaction_id: Option<String>,
    pub amount: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
