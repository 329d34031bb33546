pub mod content;
pub mod payment;

pub use content::{ContentKind, ContentUnit, Course, Question, Section, SectionBody, Video};
pub use payment::{
    CheckoutCompletion, CheckoutResult, OrderReceipt, PaymentOrder, VerificationRequest, Viewer,
};
