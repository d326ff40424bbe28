//! Low-level HTTP client — `StorefrontHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the sub-clients). Internal to the SDK — `StorefrontClient` wraps
//! this.

use crate::domain::address::wire::AddressResponse;
use crate::domain::order::wire::OrderResponse;
use crate::domain::payment::wire::PaymentResponse;
use crate::error::HttpError;

use async_lock::RwLock;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Default per-request timeout on native targets.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level HTTP client for the storefront REST API.
pub struct StorefrontHttp {
    base_url: String,
    client: Client,
    /// Session cookie sent with every request on native clients. NEVER exposed
    /// publicly.
    session_cookie: Arc<RwLock<Option<String>>>,
}

impl StorefrontHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_options(base_url, DEFAULT_TIMEOUT, None)
    }

    pub fn with_options(
        base_url: &str,
        timeout: Duration,
        session_cookie: Option<String>,
    ) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(timeout)
                .cookie_store(true)
                .pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
            session_cookie: Arc::new(RwLock::new(session_cookie)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the session cookie (native only — in the browser, the cookie jar
    /// handles credentials).
    pub(crate) async fn set_session_cookie(&self, cookie: Option<String>) {
        *self.session_cookie.write().await = cookie;
    }

    // ── Orders ───────────────────────────────────────────────────────────

    pub async fn get_order_by_number(&self, order_number: &str) -> Result<OrderResponse, HttpError> {
        let url = format!(
            "{}/api/orders/track/{}",
            self.base_url,
            urlencoding::encode(order_number)
        );
        self.get(&url).await
    }

    // ── Payments ─────────────────────────────────────────────────────────

    pub async fn get_payment_for_order(&self, order_id: &str) -> Result<PaymentResponse, HttpError> {
        let url = format!(
            "{}/api/payments/order/{}",
            self.base_url,
            urlencoding::encode(order_id)
        );
        self.get(&url).await
    }

    // ── Addresses ────────────────────────────────────────────────────────

    pub async fn get_address(&self, address_id: &str) -> Result<AddressResponse, HttpError> {
        let url = format!(
            "{}/api/addresses/{}",
            self.base_url,
            urlencoding::encode(address_id)
        );
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    /// Single-attempt GET. Failures are reported to the caller as-is.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.do_request(&reqwest::Method::GET, url).await
    }

    async fn do_request<T: DeserializeOwned>(
        &self,
        method: &reqwest::Method,
        url: &str,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);

        // Inject the session cookie on native
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(cookie) = self.session_cookie.read().await.as_ref() {
                req = req.header(reqwest::header::COOKIE, cookie.as_str());
            }
        }

        // Browser fetches carry cookies only when asked to
        #[cfg(target_arch = "wasm32")]
        {
            req = req.fetch_credentials_include();
        }

        tracing::debug!(%method, url, "Sending request");
        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::from(e)
            }
        })?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(|secs| secs * 1000);
        let body_text = resp.text().await.unwrap_or_default();

        Err(status_error(status_code, body_text, retry_after_ms))
    }
}

/// Map a non-success status to an `HttpError`.
fn status_error(status: u16, body: String, retry_after_ms: Option<u64>) -> HttpError {
    match status {
        401 => HttpError::Unauthorized,
        404 => HttpError::NotFound(body),
        429 => HttpError::RateLimited { retry_after_ms },
        400..=499 => HttpError::BadRequest(body),
        _ => HttpError::ServerError { status, body },
    }
}

impl Clone for StorefrontHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            session_cookie: self.session_cookie.clone(),
        }
    }
}
