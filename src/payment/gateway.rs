//! Remote payment services behind a narrow seam.
//!
//! [`PaymentRail`] covers the two outbound calls the workflow makes: order
//! creation before checkout opens, and verification after the checkout
//! surface reports success. Keeping both behind one trait makes the
//! mandatory verification step mockable in tests without any network.

use reqwest::blocking::Client;
use std::time::Duration;

use crate::error::{AccessError, Result};
use crate::models::{OrderReceipt, VerificationRequest};

// ---------------------------------------------------------------------------
// PaymentRail
// ---------------------------------------------------------------------------

/// Outbound calls to the order and verification services.
///
/// Both calls are fallible and potentially slow; implementations must bound
/// the wait (the HTTP rail applies a client timeout). `Send` so the SDK can
/// be driven from the async wrapper's blocking pool.
pub trait PaymentRail: Send {
    /// Create an order for `amount` in `currency` against the remote order
    /// service. Errors if the call fails or the service rejects the order.
    fn create_order(&self, amount: u64, currency: &str) -> Result<OrderReceipt>;

    /// Ask the remote verification service whether a completed checkout is
    /// genuine. Returns the service's verdict; a transport failure is an
    /// error, not a `false`.
    fn verify(&self, request: &VerificationRequest) -> Result<bool>;
}

// ---------------------------------------------------------------------------
// HttpRail
// ---------------------------------------------------------------------------

/// [`PaymentRail`] over the site's payment backend: JSON POSTs to
/// `{base}/orders` and `{base}/verify`.
pub struct HttpRail {
    base_url: String,
    client: Client,
}

impl HttpRail {
    /// Build a rail for the backend at `base_url` (no trailing slash) with
    /// the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

impl PaymentRail for HttpRail {
    fn create_order(&self, amount: u64, currency: &str) -> Result<OrderReceipt> {
        let url = format!("{}/{}", self.base_url, crate::config::ORDER_PATH);
        let body = serde_json::json!({ "amount": amount, "currency": currency });

        let resp = self.client.post(&url).json(&body).send()?.error_for_status()?;
        let data: serde_json::Value = resp.json()?;

        // The backend answers {orderId, amount, currency} on success; any
        // other shape is a rejection.
        if data.get("orderId").and_then(|v| v.as_str()).is_none() {
            return Err(AccessError::OrderRejected(format!(
                "order service returned no order id: {}",
                data
            )));
        }
        let receipt: OrderReceipt = serde_json::from_value(data)?;
        Ok(receipt)
    }

    fn verify(&self, request: &VerificationRequest) -> Result<bool> {
        let url = format!("{}/{}", self.base_url, crate::config::VERIFY_PATH);

        let resp = self.client.post(&url).json(request).send()?.error_for_status()?;
        let data: serde_json::Value = resp.json()?;

        Ok(data.get("success").and_then(|v| v.as_bool()).unwrap_or(false))
    }
}
