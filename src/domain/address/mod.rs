//! Address domain — the shipping address an order is delivered to.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

/// A shipping address snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingAddress {
    pub full_name: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    /// State, province or region.
    pub region: String,
    pub postal_code: Option<String>,
    pub country: String,
}

impl ShippingAddress {
    /// Lines in display order: name, phone, street lines, locality, country.
    pub fn display_lines(&self) -> Vec<String> {
        let mut lines = vec![
            self.full_name.clone(),
            self.phone.clone(),
            self.address_line1.clone(),
        ];
        if let Some(line2) = &self.address_line2 {
            lines.push(line2.clone());
        }
        lines.push(self.locality());
        lines.push(self.country.clone());
        lines
    }

    /// `"{city}, {region} {postal}"`, without the postal code when absent.
    pub fn locality(&self) -> String {
        match &self.postal_code {
            Some(postal) => format!("{}, {} {}", self.city, self.region, postal),
            None => format!("{}, {}", self.city, self.region),
        }
    }
}

impl From<wire::AddressResponse> for ShippingAddress {
    fn from(resp: wire::AddressResponse) -> Self {
        ShippingAddress {
            full_name: resp.full_name,
            phone: resp.phone,
            address_line1: resp.address_line1,
            address_line2: resp.address_line2.filter(|l| !l.is_empty()),
            city: resp.city,
            region: resp.state,
            postal_code: resp.postal_code.filter(|p| !p.is_empty()),
            country: resp.country,
        }
    }
}
