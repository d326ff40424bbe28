//! Order confirmation — the post-checkout page.
//!
//! - `loader.rs` — the fetch pipeline (order → payment → shipping address)
//! - `view.rs` — render-ready page model and its plain-text rendering
//!
//! Routing and toast delivery belong to the host application: the loader
//! returns them as [`Effect`]s instead of performing them.

pub mod loader;
pub mod view;

use async_trait::async_trait;
use std::fmt;

use crate::domain::address::ShippingAddress;
use crate::domain::order::Order;
use crate::domain::payment::Payment;
use crate::error::SdkError;
use crate::shared::{AddressId, OrderId, OrderNumber};

pub use loader::{LoadOutcome, OrderConfirmationLoader};
pub use view::ConfirmationPage;

/// Toast copy for a missing `orderNumber` query parameter.
pub const ORDER_NUMBER_NOT_FOUND: &str = "Order number not found";

/// Toast copy for a failed order lookup.
pub const ORDER_LOAD_FAILED: &str = "Failed to load order details";

// ─── Source ──────────────────────────────────────────────────────────────────

/// The three reads the confirmation page depends on.
///
/// Implemented by [`crate::client::StorefrontClient`]; tests plug in fakes.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ConfirmationSource {
    async fn order_by_number(&self, order_number: &OrderNumber) -> Result<Order, SdkError>;

    async fn payment_for_order(&self, order_id: &OrderId) -> Result<Payment, SdkError>;

    async fn address_by_id(&self, address_id: &AddressId) -> Result<ShippingAddress, SdkError>;
}

// ─── Stages ──────────────────────────────────────────────────────────────────

/// One fetch of the confirmation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchStage {
    Order,
    Payment,
    ShippingAddress,
}

impl fmt::Display for FetchStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchStage::Order => write!(f, "order"),
            FetchStage::Payment => write!(f, "payment"),
            FetchStage::ShippingAddress => write!(f, "shipping address"),
        }
    }
}

/// A failed fetch, tagged with the stage it happened in.
#[derive(Debug)]
pub struct StageFailure {
    pub stage: FetchStage,
    pub error: SdkError,
}

impl fmt::Display for StageFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} fetch failed: {}", self.stage, self.error)
    }
}

/// Outcome of a secondary fetch.
#[derive(Debug)]
pub enum Fetched<T> {
    Loaded(T),
    /// The precondition for the fetch did not hold, so it never ran.
    NotRequested,
    Unavailable(StageFailure),
}

impl<T> Fetched<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Fetched::Loaded(v) => Some(v),
            Fetched::NotRequested | Fetched::Unavailable(_) => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Fetched::Loaded(_))
    }

    pub fn failure(&self) -> Option<&StageFailure> {
        match self {
            Fetched::Unavailable(f) => Some(f),
            Fetched::Loaded(_) | Fetched::NotRequested => None,
        }
    }
}

impl<T> Default for Fetched<T> {
    fn default() -> Self {
        Fetched::NotRequested
    }
}

// ─── State ───────────────────────────────────────────────────────────────────

/// View state of the confirmation page.
#[derive(Debug)]
pub struct ConfirmationState {
    pub loading: bool,
    pub order: Option<Order>,
    pub payment: Fetched<Payment>,
    pub shipping_address: Fetched<ShippingAddress>,
}

impl ConfirmationState {
    /// Initial state: loading, nothing fetched.
    pub fn new() -> Self {
        Self {
            loading: true,
            order: None,
            payment: Fetched::NotRequested,
            shipping_address: Fetched::NotRequested,
        }
    }

    /// Secondary-stage failures that degraded the view.
    pub fn degraded(&self) -> Vec<&StageFailure> {
        self.payment
            .failure()
            .into_iter()
            .chain(self.shipping_address.failure())
            .collect()
    }
}

impl Default for ConfirmationState {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Effects ─────────────────────────────────────────────────────────────────

/// In-app route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route(String);

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn home() -> Self {
        Self::new(crate::network::HOME_ROUTE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// A fire-and-forget user notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn error(description: &str) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.to_string(),
            variant: ToastVariant::Destructive,
        }
    }
}

/// Something the host must do on behalf of the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Notify(Toast),
    Redirect(Route),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_loading() {
        let state = ConfirmationState::new();
        assert!(state.loading);
        assert!(state.order.is_none());
        assert!(state.payment.loaded().is_none());
        assert!(state.degraded().is_empty());
    }

    #[test]
    fn test_fetched_accessors() {
        let loaded: Fetched<u8> = Fetched::Loaded(7);
        assert_eq!(loaded.loaded(), Some(&7));
        assert!(loaded.failure().is_none());

        let failed: Fetched<u8> = Fetched::Unavailable(StageFailure {
            stage: FetchStage::Payment,
            error: SdkError::Other("boom".into()),
        });
        assert!(!failed.is_loaded());
        assert_eq!(
            failed.failure().map(|f| f.to_string()).as_deref(),
            Some("payment fetch failed: boom")
        );
    }

    #[test]
    fn test_error_toast() {
        let toast = Toast::error(ORDER_LOAD_FAILED);
        assert_eq!(toast.title, "Error");
        assert_eq!(toast.variant, ToastVariant::Destructive);
        assert_eq!(Route::home().as_str(), "/");
    }
}
