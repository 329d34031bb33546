//! Wire models for the checkout flow.
//!
//! `PaymentOrder` is transient: it exists for one checkout attempt and is
//! discarded whether the attempt succeeds, fails, or is abandoned.

use serde::{Deserialize, Serialize};

use super::content::ContentKind;

// ---------------------------------------------------------------------------
// Viewer
// ---------------------------------------------------------------------------

/// The current viewer's identity, passed in explicitly by the host UI and
/// forwarded to the checkout surface as prefill. The engine never reads
/// identity from ambient state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
}

// ---------------------------------------------------------------------------
// Order creation
// ---------------------------------------------------------------------------

/// Response from the remote order service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: String,
    pub amount: u64,
    pub currency: String,
}

/// Everything the external checkout surface needs to collect a payment.
#[derive(Debug, Clone)]
pub struct PaymentOrder {
    pub order_id: String,
    pub amount: u64,
    pub currency: String,
    pub target_kind: ContentKind,
    pub target_id: String,
    pub display_name: String,
    pub description: String,
    pub prefill: Viewer,
}

// ---------------------------------------------------------------------------
// Checkout completion
// ---------------------------------------------------------------------------

/// How the checkout surface finished.
#[derive(Debug, Clone)]
pub enum CheckoutResult {
    /// The surface reports a captured payment. Never trusted on its own;
    /// the workflow verifies it server-side before unlocking anything.
    Success {
        payment_id: String,
        signature: String,
    },
    Failure {
        reason: String,
    },
    /// The viewer closed the surface without paying.
    Dismissed,
}

/// The single completion callback a checkout surface eventually delivers.
#[derive(Debug, Clone)]
pub struct CheckoutCompletion {
    pub order_id: String,
    pub result: CheckoutResult,
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// Request body for the remote verification service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
    pub item_type: ContentKind,
    pub item_id: String,
    pub amount: u64,
}
