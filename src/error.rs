use crate::models::ContentKind;

#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Order service rejected the order: {0}")]
    OrderRejected(String),

    #[error("Could not confirm payment for order {order_id}; contact support")]
    VerificationRejected { order_id: String },

    #[error("A payment attempt for {kind} '{id}' is already in flight")]
    PaymentInFlight { kind: ContentKind, id: String },

    #[error("{kind} '{id}' is locked; payment of {price} required")]
    PaymentRequired {
        kind: ContentKind,
        id: String,
        price: u64,
    },

    #[error("Quiz attempt has been submitted and is read-only")]
    AttemptSealed,

    #[error("Question {question} has no selected answer")]
    IncompleteAttempt { question: usize },
}

pub type Result<T> = std::result::Result<T, AccessError>;
