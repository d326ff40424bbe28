//! # Storefront SDK
//!
//! Rust client for the storefront REST API and the post-checkout order
//! confirmation page, for native and WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Identifiers, formatting, domain models (always available, WASM-safe)
//! 2. **HTTP API** — `StorefrontHttp`, one method per endpoint
//! 3. **High-Level Client** — `StorefrontClient` with nested sub-clients
//! 4. **Confirmation** — the order → payment → address pipeline and page view
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storefront_sdk::prelude::*;
//!
//! let client = StorefrontClient::builder()
//!     .base_url("https://shop.example.com")
//!     .build()?;
//!
//! let outcome = client.load_confirmation("?orderNumber=ORD-1001").await;
//! let page = ConfirmationPage::from_state(&outcome.state, &DisplayConfig::default());
//! println!("{page}");
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, query parsing and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL and route constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `StorefrontClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + formatting
    pub use crate::shared::fmt::DisplayConfig;
    pub use crate::shared::{AddressId, OrderId, OrderNumber};

    // Domain types
    pub use crate::domain::address::ShippingAddress;
    pub use crate::domain::order::{Order, OrderItem};
    pub use crate::domain::payment::{
        BadgeVariant, Payment, PaymentCard, PaymentStatus, StatusConfig, StatusIcon, StatusTone,
    };

    // Confirmation flow
    pub use crate::domain::confirmation::{
        ConfirmationPage, ConfirmationSource, ConfirmationState, Effect, FetchStage, Fetched,
        LoadOutcome, OrderConfirmationLoader, Route, StageFailure, Toast, ToastVariant,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AddressesClient, OrdersClient, PaymentsClient, StorefrontClient, StorefrontClientBuilder,
    };
}
