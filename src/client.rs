//! High-level client — `StorefrontClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods, and plugs the client
//! into the confirmation loader.

use crate::domain::address::client::Addresses;
use crate::domain::address::ShippingAddress;
use crate::domain::confirmation::{ConfirmationSource, LoadOutcome, OrderConfirmationLoader};
use crate::domain::order::client::Orders;
use crate::domain::order::Order;
use crate::domain::payment::client::Payments;
use crate::domain::payment::Payment;
use crate::error::SdkError;
use crate::http::client::DEFAULT_TIMEOUT;
use crate::http::StorefrontHttp;
use crate::shared::{AddressId, OrderId, OrderNumber};

use async_trait::async_trait;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::address::client::Addresses as AddressesClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::payment::client::Payments as PaymentsClient;

/// The primary entry point for the storefront SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.orders()`, `client.payments()`, `client.addresses()`.
#[derive(Clone)]
pub struct StorefrontClient {
    pub(crate) http: StorefrontHttp,
}

impl StorefrontClient {
    pub fn builder() -> StorefrontClientBuilder {
        StorefrontClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn payments(&self) -> Payments<'_> {
        Payments { client: self }
    }

    pub fn addresses(&self) -> Addresses<'_> {
        Addresses { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Replace the session cookie sent with every request.
    pub async fn set_session_cookie(&self, cookie: Option<String>) {
        self.http.set_session_cookie(cookie).await;
    }

    /// Run the confirmation pipeline for a URL query string.
    pub async fn load_confirmation(&self, query: &str) -> LoadOutcome {
        OrderConfirmationLoader::new(self).load(query).await
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ConfirmationSource for StorefrontClient {
    async fn order_by_number(&self, order_number: &OrderNumber) -> Result<Order, SdkError> {
        self.orders().track(order_number).await
    }

    async fn payment_for_order(&self, order_id: &OrderId) -> Result<Payment, SdkError> {
        self.payments().for_order(order_id).await
    }

    async fn address_by_id(&self, address_id: &AddressId) -> Result<ShippingAddress, SdkError> {
        self.addresses().get(address_id).await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct StorefrontClientBuilder {
    base_url: String,
    timeout: Duration,
    session_cookie: Option<String>,
}

impl Default for StorefrontClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            session_cookie: None,
        }
    }
}

impl StorefrontClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout (native only).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pre-set the session cookie (`name=value`) on construction.
    pub fn session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    pub fn build(self) -> Result<StorefrontClient, SdkError> {
        if self.base_url.trim().is_empty() {
            return Err(SdkError::Validation("base URL must not be empty".into()));
        }

        let http = StorefrontHttp::with_options(
            &self.base_url,
            self.timeout,
            self.session_cookie,
        )?;

        tracing::debug!(base_url = http.base_url(), "Storefront client ready");
        Ok(StorefrontClient { http })
    }
}
