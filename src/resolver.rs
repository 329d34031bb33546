//! Pure lock-policy resolution.
//!
//! Kept free of side effects and network access so the policy is testable in
//! isolation and the payment workflow carries no lock-policy logic. Callers
//! branch on the result before doing anything stateful.

use crate::models::ContentUnit;
use crate::store::EntitlementStore;

/// The resolver's verdict for one content unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    RequirePayment,
}

/// Decide whether the viewer may consume `unit`.
///
/// A unit that is not locked is always allowed, regardless of the
/// entitlement set. A locked unit is allowed iff its `(kind, id)` pair has
/// been unlocked.
pub fn resolve(unit: &dyn ContentUnit, entitlements: &EntitlementStore) -> Access {
    if !unit.is_locked() {
        return Access::Allow;
    }
    if entitlements.is_unlocked(unit.kind(), unit.content_id()) {
        Access::Allow
    } else {
        Access::RequirePayment
    }
}
