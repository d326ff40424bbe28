//! Navigational query-string parsing.

use super::OrderNumber;

/// Query parameter carrying the order number on the confirmation route.
pub const ORDER_NUMBER_PARAM: &str = "orderNumber";

/// Extract the order number from a URL query string.
///
/// Accepts the query with or without its leading `?`. The first occurrence of
/// `orderNumber` wins. A missing, empty or undecodable parameter yields `None`.
pub fn order_number_from_query(query: &str) -> Option<OrderNumber> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let pairs: Vec<(String, String)> = match serde_urlencoded::from_str(query) {
        Ok(pairs) => pairs,
        Err(e) => {
            tracing::debug!(error = %e, "Unparseable query string");
            return None;
        }
    };

    pairs
        .into_iter()
        .find(|(key, _)| key == ORDER_NUMBER_PARAM)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
        .map(OrderNumber::from)
}
