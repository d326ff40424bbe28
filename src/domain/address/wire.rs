//! Wire types for address REST responses.

use serde::{Deserialize, Serialize};

/// `GET /api/addresses/{addressId}` response body.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    #[serde(default)]
    pub id: Option<String>,
    pub full_name: String,
    pub phone: String,
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub postal_code: Option<String>,
    pub country: String,
}
