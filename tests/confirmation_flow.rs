//! End-to-end tests for the order confirmation flow.
//!
//! These drive `OrderConfirmationLoader` through an in-memory
//! `ConfirmationSource` and render the resulting page, so no network access
//! is needed.

use std::str::FromStr;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use storefront_sdk::domain::confirmation::{ORDER_LOAD_FAILED, ORDER_NUMBER_NOT_FOUND};
use storefront_sdk::prelude::*;

// ─── Fake source ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reply {
    Ok,
    NotFound,
    ServerError,
    Transport,
}

impl Reply {
    fn into_err(self) -> SdkError {
        match self {
            Reply::Ok => unreachable!("not an error reply"),
            Reply::NotFound => HttpError::NotFound("not found".into()).into(),
            Reply::ServerError => HttpError::ServerError {
                status: 500,
                body: "boom".into(),
            }
            .into(),
            Reply::Transport => HttpError::Timeout.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Order(String),
    Payment(String),
    Address(String),
}

struct FakeStorefront {
    order: Reply,
    payment: Reply,
    address: Reply,
    shipping_address_id: Option<&'static str>,
    calls: Mutex<Vec<Call>>,
}

impl FakeStorefront {
    fn healthy() -> Self {
        Self {
            order: Reply::Ok,
            payment: Reply::Ok,
            address: Reply::Ok,
            shipping_address_id: Some("addr-7"),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[async_trait]
impl ConfirmationSource for FakeStorefront {
    async fn order_by_number(&self, order_number: &OrderNumber) -> Result<Order, SdkError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Order(order_number.to_string()));
        if self.order != Reply::Ok {
            return Err(self.order.into_err());
        }
        Ok(Order {
            id: OrderId::from("9c1d"),
            order_number: order_number.clone(),
            status: "PAID".into(),
            subtotal: dec("40.00"),
            tax: dec("0.00"),
            shipping_cost: dec("0.00"),
            discount: dec("0.00"),
            total: dec("40.00"),
            created_at: Some(ts("2025-01-15T14:25:00Z")),
            paid_at: Some(ts("2025-01-15T14:30:00Z")),
            shipping_address_id: self.shipping_address_id.map(AddressId::from),
            items: vec![
                OrderItem {
                    product_name: "Canvas Tote".into(),
                    variant_name: Some("Navy".into()),
                    quantity: 1,
                    unit_price: dec("25.00"),
                    total: dec("25.00"),
                },
                OrderItem {
                    product_name: "Enamel Pin".into(),
                    variant_name: None,
                    quantity: 3,
                    unit_price: dec("5.00"),
                    total: dec("15.00"),
                },
            ],
        })
    }

    async fn payment_for_order(&self, order_id: &OrderId) -> Result<Payment, SdkError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Payment(order_id.to_string()));
        if self.payment != Reply::Ok {
            return Err(self.payment.into_err());
        }
        Ok(Payment {
            id: "pay_1".into(),
            method: "credit card".into(),
            transaction_id: Some("txn_4f7a".into()),
            amount: dec("19.99"),
            status: PaymentStatus::Completed,
            created_at: ts("2025-01-15T14:30:00Z"),
        })
    }

    async fn address_by_id(&self, address_id: &AddressId) -> Result<ShippingAddress, SdkError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Address(address_id.to_string()));
        if self.address != Reply::Ok {
            return Err(self.address.into_err());
        }
        Ok(ShippingAddress {
            full_name: "Ada Lovelace".into(),
            phone: "+1 555 0100".into(),
            address_line1: "12 Analytical Way".into(),
            address_line2: Some("Suite 4".into()),
            city: "Portland".into(),
            region: "OR".into(),
            postal_code: Some("97201".into()),
            country: "United States".into(),
        })
    }
}

async fn load(source: &FakeStorefront, query: &str) -> LoadOutcome {
    OrderConfirmationLoader::new(source).load(query).await
}

fn ready(outcome: &LoadOutcome) -> storefront_sdk::domain::confirmation::view::ReadyPage {
    match ConfirmationPage::from_state(&outcome.state, &DisplayConfig::default()) {
        ConfirmationPage::Ready(page) => page,
        ConfirmationPage::Loading => panic!("page still loading"),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_happy_path_loads_everything_in_order() {
    let source = FakeStorefront::healthy();
    let outcome = load(&source, "?orderNumber=ORD-1001").await;

    assert_eq!(
        source.calls(),
        vec![
            Call::Order("ORD-1001".into()),
            Call::Payment("9c1d".into()),
            Call::Address("addr-7".into()),
        ]
    );
    assert!(!outcome.state.loading);
    assert!(outcome.state.order.is_some());
    assert!(outcome.state.payment.is_loaded());
    assert!(outcome.state.shipping_address.is_loaded());
    assert!(outcome.effects.is_empty());

    let page = ready(&outcome);
    assert_eq!(page.order_number.as_deref(), Some("ORD-1001"));
    assert_eq!(page.view_order.route.as_str(), "/orders/9c1d");
    assert_eq!(page.continue_shopping.route.as_str(), "/products");

    let card = page.payment.as_ref().unwrap();
    assert_eq!(card.amount, "$19.99");
    assert_eq!(card.method, "Credit Card");
    assert_eq!(card.config.label, "Completed");
    assert_eq!(card.processed_on, "January 15, 2025, 02:30 PM");

    let summary = page.summary.as_ref().unwrap();
    assert_eq!(summary.shipping, "FREE");
    assert_eq!(summary.total, "$40.00");
    assert!(summary.tax.is_none());
    assert!(summary.discount.is_none());

    let address = page.shipping_address.as_ref().unwrap();
    assert_eq!(address[4], "Portland, OR 97201");
}

#[tokio::test]
async fn test_missing_order_number_redirects_without_fetching() {
    for query in ["", "?", "?ref=email", "?orderNumber="] {
        let source = FakeStorefront::healthy();
        let outcome = load(&source, query).await;

        assert!(source.calls().is_empty(), "query {query:?} hit the network");
        assert!(!outcome.state.loading);
        assert!(outcome.state.order.is_none());
        assert_eq!(
            outcome.effects,
            vec![
                Effect::Notify(Toast::error(ORDER_NUMBER_NOT_FOUND)),
                Effect::Redirect(Route::new("/")),
            ]
        );
    }
}

#[tokio::test]
async fn test_payment_failure_is_silent() {
    for reply in [Reply::NotFound, Reply::ServerError, Reply::Transport] {
        let source = FakeStorefront {
            payment: reply,
            ..FakeStorefront::healthy()
        };
        let outcome = load(&source, "orderNumber=ORD-1001").await;

        assert!(outcome.state.order.is_some());
        assert!(outcome.state.payment.loaded().is_none());
        assert_eq!(outcome.toasts().count(), 0, "{reply:?} produced a toast");
        assert!(outcome.redirect().is_none());
        // the address is still fetched after a failed payment
        assert!(outcome.state.shipping_address.is_loaded());

        let page = ready(&outcome);
        assert!(page.payment.is_none());
        assert!(page.summary.is_some());
    }
}

#[tokio::test]
async fn test_order_failure_notifies_once_and_stays_on_page() {
    for reply in [Reply::NotFound, Reply::ServerError, Reply::Transport] {
        let source = FakeStorefront {
            order: reply,
            ..FakeStorefront::healthy()
        };
        let outcome = load(&source, "orderNumber=ORD-404").await;

        assert_eq!(source.calls(), vec![Call::Order("ORD-404".into())]);
        assert!(!outcome.state.loading);
        assert!(outcome.state.order.is_none());
        assert!(outcome.state.payment.loaded().is_none());
        assert!(outcome.state.shipping_address.loaded().is_none());

        let toasts: Vec<_> = outcome.toasts().collect();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].description, ORDER_LOAD_FAILED);
        assert_eq!(toasts[0].variant, ToastVariant::Destructive);
        assert!(outcome.redirect().is_none());

        let page = ready(&outcome);
        assert_eq!(page.view_order.route.as_str(), "/orders");
        assert!(page.summary.is_none());
    }
}

#[tokio::test]
async fn test_no_address_reference_skips_address_fetch() {
    let source = FakeStorefront {
        shipping_address_id: None,
        ..FakeStorefront::healthy()
    };
    let outcome = load(&source, "orderNumber=ORD-1001").await;

    assert!(!source
        .calls()
        .iter()
        .any(|c| matches!(c, Call::Address(_))));
    assert!(matches!(
        outcome.state.shipping_address,
        Fetched::NotRequested
    ));
    assert!(ready(&outcome).shipping_address.is_none());
}

#[tokio::test]
async fn test_address_failure_degrades_only_that_section() {
    let source = FakeStorefront {
        address: Reply::ServerError,
        ..FakeStorefront::healthy()
    };
    let outcome = load(&source, "orderNumber=ORD-1001").await;

    let degraded = outcome.state.degraded();
    assert_eq!(degraded.len(), 1);
    assert_eq!(degraded[0].stage, FetchStage::ShippingAddress);
    assert!(outcome.effects.is_empty());

    let page = ready(&outcome);
    assert!(page.payment.is_some());
    assert!(page.shipping_address.is_none());
}

#[tokio::test]
async fn test_rendered_text_page() {
    let source = FakeStorefront::healthy();
    let outcome = load(&source, "orderNumber=ORD-1001").await;
    let text = ConfirmationPage::from_state(&outcome.state, &DisplayConfig::default()).to_string();

    assert!(text.contains("Payment Successful!"));
    assert!(text.contains("ORD-1001"));
    assert!(text.contains("Completed"));
    assert!(text.contains("`txn_4f7a`"));
    assert!(text.contains("Payment processed on January 15, 2025, 02:30 PM"));
    assert!(text.contains("Qty: 3"));
    assert!(text.contains("FREE"));
    assert!(text.contains("Suite 4"));
    assert!(text.contains("A confirmation email has been sent"));
}
