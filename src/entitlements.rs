//! Read interface over the durable entitlement set.
//!
//! Deliberately read-only: the only writer is the payment workflow, after
//! server-side verification.

use crate::models::ContentKind;
use crate::AccessSdk;

/// Entitlement queries, borrowed from the SDK.
pub struct Entitlements<'a> {
    sdk: &'a AccessSdk,
}

impl<'a> Entitlements<'a> {
    pub(crate) fn new(sdk: &'a AccessSdk) -> Self {
        Self { sdk }
    }

    /// Whether the viewer owns `(kind, id)`.
    pub fn is_unlocked(&self, kind: ContentKind, id: &str) -> bool {
        self.sdk.entitlements.borrow().is_unlocked(kind, id)
    }

    /// Number of owned `(kind, id)` pairs.
    pub fn count(&self) -> usize {
        self.sdk.entitlements.borrow().len()
    }
}
