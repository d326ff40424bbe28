//! Payments sub-client — payment lookup by order.

use crate::client::StorefrontClient;
use crate::domain::payment::Payment;
use crate::error::SdkError;
use crate::shared::OrderId;

pub struct Payments<'a> {
    pub(crate) client: &'a StorefrontClient,
}

impl<'a> Payments<'a> {
    /// Fetch the payment recorded against an order.
    pub async fn for_order(&self, order_id: &OrderId) -> Result<Payment, SdkError> {
        let resp = self
            .client
            .http
            .get_payment_for_order(order_id.as_str())
            .await?;
        Payment::try_from(resp)
    }
}
