//! Addresses sub-client.

use crate::client::StorefrontClient;
use crate::domain::address::ShippingAddress;
use crate::error::SdkError;
use crate::shared::AddressId;

pub struct Addresses<'a> {
    pub(crate) client: &'a StorefrontClient,
}

impl<'a> Addresses<'a> {
    pub async fn get(&self, address_id: &AddressId) -> Result<ShippingAddress, SdkError> {
        let resp = self.client.http.get_address(address_id.as_str()).await?;
        Ok(ShippingAddress::from(resp))
    }
}
