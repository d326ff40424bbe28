//! Network URL and route constants for the storefront SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Home route, target of the missing-order-number redirect.
pub const HOME_ROUTE: &str = "/";

/// Order history route, used when no order is loaded.
pub const ORDERS_ROUTE: &str = "/orders";

/// Product listing route.
pub const PRODUCTS_ROUTE: &str = "/products";
