//! Render-ready confirmation page and its plain-text rendering.

use std::fmt;

use super::{ConfirmationState, Route};
use crate::domain::address::ShippingAddress;
use crate::domain::order::Order;
use crate::domain::payment::PaymentCard;
use crate::network::{ORDERS_ROUTE, PRODUCTS_ROUTE};
use crate::shared::fmt::{shipping_label, DisplayConfig};

pub const TITLE: &str = "Payment Successful!";
pub const THANK_YOU: &str =
    "Thank you for your purchase. Your order has been confirmed and will be processed shortly.";
pub const EMAIL_NOTICE: &str =
    "A confirmation email has been sent to your registered email address.";

/// A labelled in-app link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub route: Route,
}

/// One rendered order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub product_name: String,
    pub variant_name: Option<String>,
    pub quantity: u32,
    pub total: String,
}

/// Rendered order totals. Optional rows are omitted when not applicable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub lines: Vec<SummaryLine>,
    pub subtotal: String,
    /// Present only for a positive tax.
    pub tax: Option<String>,
    /// `FREE` for zero shipping.
    pub shipping: String,
    /// Present only for a positive discount, already negated (`-$5.00`).
    pub discount: Option<String>,
    pub total: String,
}

impl OrderSummary {
    pub fn new(order: &Order, display: &DisplayConfig) -> Self {
        Self {
            lines: order
                .items
                .iter()
                .map(|item| SummaryLine {
                    product_name: item.product_name.clone(),
                    variant_name: item.variant_name.clone(),
                    quantity: item.quantity,
                    total: display.price(&item.total),
                })
                .collect(),
            subtotal: display.price(&order.subtotal),
            tax: order.has_tax().then(|| display.price(&order.tax)),
            shipping: shipping_label(&order.shipping_cost, &display.currency_symbol),
            discount: order
                .has_discount()
                .then(|| format!("-{}", display.price(&order.discount))),
            total: display.price(&order.total),
        }
    }
}

/// The whole page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationPage {
    Loading,
    Ready(ReadyPage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyPage {
    pub order_number: Option<String>,
    pub view_order: Link,
    pub continue_shopping: Link,
    pub payment: Option<PaymentCard>,
    pub summary: Option<OrderSummary>,
    pub shipping_address: Option<Vec<String>>,
}

impl ConfirmationPage {
    pub fn from_state(state: &ConfirmationState, display: &DisplayConfig) -> Self {
        if state.loading {
            return ConfirmationPage::Loading;
        }

        let order = state.order.as_ref();
        ConfirmationPage::Ready(ReadyPage {
            order_number: order.map(|o| o.order_number.to_string()),
            view_order: Link {
                label: "View Order Details",
                route: view_order_route(order),
            },
            continue_shopping: Link {
                label: "Continue Shopping",
                route: Route::new(PRODUCTS_ROUTE),
            },
            payment: state
                .payment
                .loaded()
                .map(|p| PaymentCard::new(p, display)),
            summary: order.map(|o| OrderSummary::new(o, display)),
            shipping_address: state
                .shipping_address
                .loaded()
                .map(ShippingAddress::display_lines),
        })
    }
}

/// `/orders/{id}` for a loaded order, otherwise `/orders`.
pub fn view_order_route(order: Option<&Order>) -> Route {
    match order {
        Some(o) => Route::new(format!("{}/{}", ORDERS_ROUTE, o.id)),
        None => Route::new(ORDERS_ROUTE),
    }
}

// ─── Text rendering ──────────────────────────────────────────────────────────

const RULE: &str = "────────────────────────────────────────";

fn row(f: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
    writeln!(f, "  {:<28}{:>12}", label, value)
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order Summary")?;
        for line in &self.lines {
            row(f, &line.product_name, &line.total)?;
            if let Some(variant) = &line.variant_name {
                writeln!(f, "    {}", variant)?;
            }
            writeln!(f, "    Qty: {}", line.quantity)?;
        }
        writeln!(f, "  {}", RULE)?;
        row(f, "Subtotal", &self.subtotal)?;
        if let Some(tax) = &self.tax {
            row(f, "Tax", tax)?;
        }
        row(f, "Shipping", &self.shipping)?;
        if let Some(discount) = &self.discount {
            row(f, "Discount", discount)?;
        }
        writeln!(f, "  {}", RULE)?;
        row(f, "Total", &self.total)
    }
}

impl fmt::Display for ConfirmationPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = match self {
            ConfirmationPage::Loading => return writeln!(f, "Loading…"),
            ConfirmationPage::Ready(page) => page,
        };

        writeln!(f, "✔ {}", TITLE)?;
        writeln!(f, "{}", THANK_YOU)?;
        if let Some(number) = &page.order_number {
            writeln!(f)?;
            writeln!(f, "Order Number")?;
            writeln!(f, "  {}", number)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "[{}] {}    [{}] {}",
            page.view_order.label,
            page.view_order.route,
            page.continue_shopping.label,
            page.continue_shopping.route
        )?;

        if let Some(card) = &page.payment {
            writeln!(f)?;
            write!(f, "{}", card)?;
        }
        if let Some(summary) = &page.summary {
            writeln!(f)?;
            write!(f, "{}", summary)?;
        }
        if let Some(lines) = &page.shipping_address {
            writeln!(f)?;
            writeln!(f, "Shipping Address")?;
            for line in lines {
                writeln!(f, "  {}", line)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", EMAIL_NOTICE)
    }
}
