//! Confirmation fetch pipeline.
//!
//! 1. Read `orderNumber` from the query; missing → error toast + redirect home.
//! 2. Fetch the order; any failure → error toast, no redirect, nothing else runs.
//! 3. Fetch the payment by order id; failure only degrades the view.
//! 4. Fetch the shipping address if the order references one; same policy.
//!
//! Fetches are sequential. `loading` is cleared on every path.

use tracing::{debug, error, warn};

use super::{
    ConfirmationSource, ConfirmationState, Effect, FetchStage, Fetched, Route, StageFailure,
    Toast, ORDER_LOAD_FAILED, ORDER_NUMBER_NOT_FOUND,
};
use crate::shared::{order_number_from_query, OrderNumber};

/// Final state of a load plus the effects the host must apply.
#[derive(Debug)]
pub struct LoadOutcome {
    pub state: ConfirmationState,
    pub effects: Vec<Effect>,
}

impl LoadOutcome {
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.effects.iter().filter_map(|e| match e {
            Effect::Notify(t) => Some(t),
            Effect::Redirect(_) => None,
        })
    }

    pub fn redirect(&self) -> Option<&Route> {
        self.effects.iter().find_map(|e| match e {
            Effect::Redirect(r) => Some(r),
            Effect::Notify(_) => None,
        })
    }
}

/// Loads everything the confirmation page shows.
pub struct OrderConfirmationLoader<'a, S: ConfirmationSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: ConfirmationSource + ?Sized> OrderConfirmationLoader<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Run the pipeline for the given URL query string.
    pub async fn load(&self, query: &str) -> LoadOutcome {
        let mut state = ConfirmationState::new();
        let mut effects = Vec::new();

        match order_number_from_query(query) {
            Some(order_number) => {
                self.fetch_into(&order_number, &mut state, &mut effects)
                    .await
            }
            None => {
                warn!("Confirmation page opened without an order number");
                effects.push(Effect::Notify(Toast::error(ORDER_NUMBER_NOT_FOUND)));
                effects.push(Effect::Redirect(Route::home()));
            }
        }

        state.loading = false;
        LoadOutcome { state, effects }
    }

    async fn fetch_into(
        &self,
        order_number: &OrderNumber,
        state: &mut ConfirmationState,
        effects: &mut Vec<Effect>,
    ) {
        debug!(order_number = %order_number, "Fetching order");
        let order = match self.source.order_by_number(order_number).await {
            Ok(order) => order,
            Err(e) => {
                let failure = StageFailure {
                    stage: FetchStage::Order,
                    error: e,
                };
                error!(order_number = %order_number, "{}", failure);
                effects.push(Effect::Notify(Toast::error(ORDER_LOAD_FAILED)));
                return;
            }
        };

        debug!(order_id = %order.id, "Fetching payment");
        state.payment = match self.source.payment_for_order(&order.id).await {
            Ok(payment) => Fetched::Loaded(payment),
            Err(e) => degrade(FetchStage::Payment, e),
        };

        state.shipping_address = match &order.shipping_address_id {
            Some(address_id) => {
                debug!(address_id = %address_id, "Fetching shipping address");
                match self.source.address_by_id(address_id).await {
                    Ok(address) => Fetched::Loaded(address),
                    Err(e) => degrade(FetchStage::ShippingAddress, e),
                }
            }
            None => Fetched::NotRequested,
        };

        state.order = Some(order);
    }
}

fn degrade<T>(stage: FetchStage, error: crate::error::SdkError) -> Fetched<T> {
    let failure = StageFailure { stage, error };
    warn!(
        non_success = failure.error.is_status(),
        "{}; section omitted", failure
    );
    Fetched::Unavailable(failure)
}
