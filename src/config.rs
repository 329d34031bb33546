use std::path::PathBuf;
use std::time::Duration;

/// Path appended to the payment backend base URL for order creation.
pub const ORDER_PATH: &str = "orders";

/// Path appended to the payment backend base URL for payment verification.
pub const VERIFY_PATH: &str = "verify";

/// Currency used when the caller does not specify one (minor units).
pub const DEFAULT_CURRENCY: &str = "INR";

/// Display name handed to the checkout surface.
pub const CHECKOUT_DISPLAY_NAME: &str = "MedLearn";

/// Timeout applied to order-creation and verification calls. Both remote
/// services must be treated as unboundedly slow; this bounds the wait so a
/// hung verification cannot leave an attempt stuck.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub fn default_store_dir() -> PathBuf {
    if let Some(data) = dirs::data_local_dir() {
        data.join("medlearn-access")
    } else {
        PathBuf::from(".medlearn-access")
    }
}
