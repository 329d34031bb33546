//! The payment order workflow.
//!
//! One checkout attempt runs IDLE -> ORDER_REQUESTED -> CHECKOUT_OPEN ->
//! VERIFYING -> UNLOCKED | FAILED. The workflow never trusts the checkout
//! surface's success callback on its own: the only path to
//! `EntitlementStore::unlock` runs through `PaymentRail::verify`. Every
//! terminal outcome discards the attempt, so the unit is back at IDLE and a
//! retry creates a fresh order.
//!
//! Pending attempts are keyed by order id. A completion for an order id
//! with no pending attempt — delivered late after an abandon, or belonging
//! to a superseded session — is ignored rather than applied.

use std::collections::HashMap;

use crate::error::{AccessError, Result};
use crate::models::{
    CheckoutCompletion, CheckoutResult, ContentKind, ContentUnit, PaymentOrder,
    VerificationRequest, Viewer,
};
use crate::AccessSdk;

// ---------------------------------------------------------------------------
// Phases and outcomes
// ---------------------------------------------------------------------------

/// Where one checkout attempt currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentPhase {
    Idle,
    OrderRequested,
    CheckoutOpen,
    Verifying,
    Unlocked,
    Failed,
}

/// Terminal result of applying a checkout completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Verification confirmed the payment; the entitlement is recorded.
    Unlocked,
    /// The viewer dismissed the checkout surface without paying.
    Cancelled,
    /// The checkout surface reported a failure.
    Failed { reason: String },
    /// The completion matched no pending attempt and was discarded.
    Ignored,
}

// ---------------------------------------------------------------------------
// CheckoutSurface
// ---------------------------------------------------------------------------

/// The externally supplied checkout UI.
///
/// Receives one order and eventually delivers exactly one completion. There
/// is no program-initiated cancel; only the surface's own dismiss action
/// ends an open checkout without a payment.
pub trait CheckoutSurface {
    fn collect(&mut self, order: &PaymentOrder) -> CheckoutCompletion;
}

// ---------------------------------------------------------------------------
// PendingAttempts
// ---------------------------------------------------------------------------

struct PendingAttempt {
    kind: ContentKind,
    id: String,
    amount: u64,
    phase: PaymentPhase,
}

/// In-flight checkout attempts, keyed by order id.
///
/// Held by the SDK behind a `RefCell`; the single-threaded event model
/// serializes all access.
#[derive(Default)]
pub struct PendingAttempts {
    by_order: HashMap<String, PendingAttempt>,
}

impl PendingAttempts {
    fn in_flight_for(&self, kind: ContentKind, id: &str) -> bool {
        self.by_order.values().any(|a| a.kind == kind && a.id == id)
    }

    fn phase_for(&self, kind: ContentKind, id: &str) -> PaymentPhase {
        self.by_order
            .values()
            .find(|a| a.kind == kind && a.id == id)
            .map(|a| a.phase)
            .unwrap_or(PaymentPhase::Idle)
    }
}

// ---------------------------------------------------------------------------
// Payments
// ---------------------------------------------------------------------------

/// Payment workflow interface, borrowed from the SDK.
pub struct Payments<'a> {
    sdk: &'a AccessSdk,
}

impl<'a> Payments<'a> {
    pub(crate) fn new(sdk: &'a AccessSdk) -> Self {
        Self { sdk }
    }

    /// Start a checkout attempt for `unit`: create a remote order and
    /// register the attempt. Returns the [`PaymentOrder`] to hand to the
    /// checkout surface.
    ///
    /// Rejected with [`AccessError::PaymentInFlight`] while another attempt
    /// for the same unit is pending. An order-service failure surfaces here
    /// and leaves nothing registered — the unit stays at IDLE.
    pub fn begin(
        &self,
        unit: &dyn ContentUnit,
        viewer: &Viewer,
        description: &str,
    ) -> Result<PaymentOrder> {
        let kind = unit.kind();
        let id = unit.content_id();

        if self.sdk.pending.borrow().in_flight_for(kind, id) {
            return Err(AccessError::PaymentInFlight {
                kind,
                id: id.to_string(),
            });
        }

        let receipt = self.sdk.rail.create_order(unit.price(), &self.sdk.currency)?;
        eprintln!(
            "Created order {} ({} {}) for {} '{}'",
            receipt.order_id, receipt.amount, receipt.currency, kind, id
        );

        self.sdk.pending.borrow_mut().by_order.insert(
            receipt.order_id.clone(),
            PendingAttempt {
                kind,
                id: id.to_string(),
                amount: receipt.amount,
                phase: PaymentPhase::CheckoutOpen,
            },
        );

        Ok(PaymentOrder {
            order_id: receipt.order_id,
            amount: receipt.amount,
            currency: receipt.currency,
            target_kind: kind,
            target_id: id.to_string(),
            display_name: self.sdk.display_name.clone(),
            description: description.to_string(),
            prefill: viewer.clone(),
        })
    }

    /// Apply a checkout completion.
    ///
    /// A completion whose order id matches no pending attempt returns
    /// [`PaymentOutcome::Ignored`] and changes nothing. A reported success
    /// goes through mandatory remote verification before any entitlement is
    /// granted; a verification verdict of `false` leaves the entitlement set
    /// untouched and surfaces as [`AccessError::VerificationRejected`].
    /// All terminal paths remove the pending attempt.
    pub fn complete(&self, completion: CheckoutCompletion) -> Result<PaymentOutcome> {
        let CheckoutCompletion { order_id, result } = completion;

        let (payment_id, signature) = match result {
            CheckoutResult::Dismissed => {
                let mut pending = self.sdk.pending.borrow_mut();
                if pending.by_order.remove(&order_id).is_none() {
                    return Ok(ignored(&order_id));
                }
                return Ok(PaymentOutcome::Cancelled);
            }
            CheckoutResult::Failure { reason } => {
                let mut pending = self.sdk.pending.borrow_mut();
                if pending.by_order.remove(&order_id).is_none() {
                    return Ok(ignored(&order_id));
                }
                return Ok(PaymentOutcome::Failed { reason });
            }
            CheckoutResult::Success {
                payment_id,
                signature,
            } => (payment_id, signature),
        };

        let (kind, id, amount) = {
            let mut pending = self.sdk.pending.borrow_mut();
            match pending.by_order.get_mut(&order_id) {
                Some(attempt) => {
                    attempt.phase = PaymentPhase::Verifying;
                    (attempt.kind, attempt.id.clone(), attempt.amount)
                }
                None => return Ok(ignored(&order_id)),
            }
        };

        let request = VerificationRequest {
            order_id: order_id.clone(),
            payment_id,
            signature,
            item_type: kind,
            item_id: id.clone(),
            amount,
        };

        let verdict = self.sdk.rail.verify(&request);

        // Terminal either way: the attempt is spent, retries need a new order.
        self.sdk.pending.borrow_mut().by_order.remove(&order_id);

        match verdict {
            Err(e) => Err(e),
            Ok(false) => {
                eprintln!(
                    "Payment verification REJECTED for order {} (payment {}); \
                     entitlement not granted, flag for manual reconciliation",
                    order_id, request.payment_id
                );
                Err(AccessError::VerificationRejected { order_id })
            }
            Ok(true) => {
                self.sdk.entitlements.borrow_mut().unlock(kind, &id)?;
                eprintln!("Verified payment for order {}; unlocked {} '{}'", order_id, kind, id);
                Ok(PaymentOutcome::Unlocked)
            }
        }
    }

    /// Discard a pending attempt. A completion that arrives for it later is
    /// ignored by the order-id guard. No-op if the order is not pending.
    pub fn abandon(&self, order_id: &str) {
        self.sdk.pending.borrow_mut().by_order.remove(order_id);
    }

    /// Current phase of the attempt targeting `(kind, id)`, or
    /// [`PaymentPhase::Idle`] when nothing is pending for it.
    pub fn phase_of(&self, kind: ContentKind, id: &str) -> PaymentPhase {
        self.sdk.pending.borrow().phase_for(kind, id)
    }

    /// Run a whole attempt in one call: create the order, let `surface`
    /// collect the payment, then apply its completion.
    pub fn purchase(
        &self,
        unit: &dyn ContentUnit,
        viewer: &Viewer,
        description: &str,
        surface: &mut dyn CheckoutSurface,
    ) -> Result<PaymentOutcome> {
        let order = self.begin(unit, viewer, description)?;
        let completion = surface.collect(&order);
        self.complete(completion)
    }
}

fn ignored(order_id: &str) -> PaymentOutcome {
    eprintln!("Ignoring checkout completion for unknown order {}", order_id);
    PaymentOutcome::Ignored
}
