//! Conversions: payment wire types → Payment domain types.

use super::wire::PaymentResponse;
use super::{Payment, PaymentStatus};
use crate::error::SdkError;
use crate::shared::parse_money;

impl TryFrom<PaymentResponse> for Payment {
    type Error = SdkError;

    fn try_from(resp: PaymentResponse) -> Result<Self, Self::Error> {
        Ok(Payment {
            amount: parse_money("amount", &resp.amount)?,
            status: PaymentStatus::from(resp.status),
            transaction_id: resp.transaction_id.filter(|t| !t.is_empty()),
            id: resp.id,
            method: resp.method,
            created_at: resp.created_at,
        })
    }
}
