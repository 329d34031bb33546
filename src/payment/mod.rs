pub mod gateway;
pub mod workflow;

pub use gateway::{HttpRail, PaymentRail};
pub use workflow::{CheckoutSurface, PaymentOutcome, PaymentPhase, Payments, PendingAttempts};
