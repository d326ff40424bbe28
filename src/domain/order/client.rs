//! Orders sub-client — order lookup by number.

use crate::client::StorefrontClient;
use crate::domain::order::Order;
use crate::error::SdkError;
use crate::shared::OrderNumber;

pub struct Orders<'a> {
    pub(crate) client: &'a StorefrontClient,
}

impl<'a> Orders<'a> {
    /// Look up an order by its human-readable number.
    pub async fn track(&self, order_number: &OrderNumber) -> Result<Order, SdkError> {
        let resp = self
            .client
            .http
            .get_order_by_number(order_number.as_str())
            .await?;
        Order::try_from(resp)
    }
}
