//! Premium-content entitlement engine for the MedLearn lecture platform.
//!
//! Decides, per content unit (video, course, or course section), whether the
//! viewer may consume it; drives a third-party checkout flow to purchase
//! access; durably records entitlements; tracks resumable playback progress;
//! and grades quizzes gated by the same entitlement rules. The surrounding
//! site supplies the catalog and the viewer identity; this crate renders
//! nothing and owns no session lifecycle.
//!
//! # Quick start
//!
//! ```no_run
//! use medlearn_access::models::{Video, Viewer};
//! use medlearn_access::{Access, AccessSdk};
//!
//! let sdk = AccessSdk::builder()
//!     .backend_url("https://medlearn.example/api/payments")
//!     .build()
//!     .unwrap();
//!
//! let video = Video {
//!     id: "v1".into(),
//!     title: "Cardiac cycle".into(),
//!     source_url: "https://cdn.example/v1.m3u8".into(),
//!     locked: true,
//!     price: 9900,
//! };
//!
//! if sdk.resolve(&video) == Access::RequirePayment {
//!     let _order = sdk
//!         .payments()
//!         .begin(&video, &Viewer::default(), &video.title)
//!         .unwrap();
//!     // hand `order` to the checkout surface, then feed its completion
//!     // back through sdk.payments().complete(..)
//! }
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod course;
pub mod entitlements;
pub mod error;
pub mod models;
pub mod payment;
pub mod progress;
pub mod quiz;
pub mod resolver;
pub mod store;

#[cfg(feature = "async")]
pub use async_client::AsyncAccessSdk;
pub use course::{CourseSession, SectionEntry};
pub use error::{AccessError, Result};
pub use payment::{CheckoutSurface, HttpRail, PaymentOutcome, PaymentPhase, PaymentRail};
pub use quiz::QuizAttempt;
pub use resolver::Access;

use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use models::{ContentUnit, Course};
use payment::workflow::PendingAttempts;
use store::{EntitlementStore, ProgressStore};

// ---------------------------------------------------------------------------
// AccessSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AccessSdk`] instance.
///
/// Use [`AccessSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](AccessSdkBuilder::build).
pub struct AccessSdkBuilder {
    store_dir: Option<PathBuf>,
    backend_url: Option<String>,
    rail: Option<Box<dyn PaymentRail>>,
    timeout: Duration,
    currency: String,
    display_name: String,
}

impl Default for AccessSdkBuilder {
    fn default() -> Self {
        Self {
            store_dir: None,
            backend_url: None,
            rail: None,
            timeout: config::DEFAULT_TIMEOUT,
            currency: config::DEFAULT_CURRENCY.to_string(),
            display_name: config::CHECKOUT_DISPLAY_NAME.to_string(),
        }
    }
}

impl AccessSdkBuilder {
    /// Set a custom directory for the entitlement and progress files.
    ///
    /// Defaults to the platform-appropriate local data directory
    /// (e.g. `~/.local/share/medlearn-access` on Linux).
    pub fn store_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.store_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Base URL of the payment backend (order creation and verification).
    pub fn backend_url(mut self, url: &str) -> Self {
        self.backend_url = Some(url.to_string());
        self
    }

    /// Supply a custom [`PaymentRail`] instead of the HTTP backend.
    pub fn rail(mut self, rail: impl PaymentRail + 'static) -> Self {
        self.rail = Some(Box::new(rail));
        self
    }

    #[cfg(feature = "async")]
    pub(crate) fn boxed_rail(mut self, rail: Box<dyn PaymentRail>) -> Self {
        self.rail = Some(rail);
        self
    }

    /// Timeout for order-creation and verification calls.
    ///
    /// Bounds the wait on the remote services so a hung call cannot leave
    /// an attempt stuck mid-verification.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Currency code for created orders. Defaults to
    /// [`config::DEFAULT_CURRENCY`].
    pub fn currency(mut self, currency: &str) -> Self {
        self.currency = currency.to_string();
        self
    }

    /// Display name shown on the checkout surface.
    pub fn display_name(mut self, name: &str) -> Self {
        self.display_name = name.to_string();
        self
    }

    /// Build the SDK, eagerly loading the entitlement and progress stores.
    ///
    /// Requires either [`backend_url`](Self::backend_url) or a custom
    /// [`rail`](Self::rail). No network call is made here; the payment
    /// backend is only contacted when a checkout attempt starts.
    pub fn build(self) -> Result<AccessSdk> {
        let store_dir = self.store_dir.unwrap_or_else(config::default_store_dir);
        let entitlements = EntitlementStore::open(&store_dir)?;
        let progress = ProgressStore::open(&store_dir)?;

        let rail: Box<dyn PaymentRail> = match (self.rail, self.backend_url) {
            (Some(rail), _) => rail,
            (None, Some(url)) => Box::new(HttpRail::new(&url, self.timeout)?),
            (None, None) => {
                return Err(AccessError::InvalidArgument(
                    "a payment backend URL or a custom rail is required".to_string(),
                ))
            }
        };

        Ok(AccessSdk {
            store_dir,
            rail,
            currency: self.currency,
            display_name: self.display_name,
            entitlements: RefCell::new(entitlements),
            progress: RefCell::new(progress),
            pending: RefCell::new(PendingAttempts::default()),
        })
    }
}

// ---------------------------------------------------------------------------
// AccessSdk
// ---------------------------------------------------------------------------

/// The main entry point for the entitlement engine.
///
/// Owns the durable stores and the payment rail; domain operations are
/// exposed as lightweight borrowing wrappers. All state is written by a
/// single logical session, so interior mutability via `RefCell` is enough.
///
/// Created via [`AccessSdk::builder()`].
pub struct AccessSdk {
    store_dir: PathBuf,
    pub(crate) rail: Box<dyn PaymentRail>,
    pub(crate) currency: String,
    pub(crate) display_name: String,
    pub(crate) entitlements: RefCell<EntitlementStore>,
    pub(crate) progress: RefCell<ProgressStore>,
    pub(crate) pending: RefCell<PendingAttempts>,
}

impl AccessSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> AccessSdkBuilder {
        AccessSdkBuilder::default()
    }

    /// Decide whether the viewer may consume `unit`.
    ///
    /// Pure policy over the unit's lock flag and the entitlement set; the
    /// caller branches on the result before doing anything stateful.
    pub fn resolve(&self, unit: &dyn ContentUnit) -> Access {
        resolver::resolve(unit, &self.entitlements.borrow())
    }

    // -- Accessors ---------------------------------------------------------

    /// Access the entitlement query interface.
    pub fn entitlements(&self) -> entitlements::Entitlements<'_> {
        entitlements::Entitlements::new(self)
    }

    /// Access the playback progress tracker.
    pub fn progress(&self) -> progress::Progress<'_> {
        progress::Progress::new(self)
    }

    /// Access the payment workflow interface.
    pub fn payments(&self) -> payment::Payments<'_> {
        payment::Payments::new(self)
    }

    /// Open a course navigation session over `course`.
    pub fn course(&self, course: Course) -> CourseSession<'_> {
        CourseSession::new(self, course)
    }

    /// Directory holding the entitlement and progress files.
    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for AccessSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AccessSdk(store_dir={}, entitlements={}, currency={})",
            self.store_dir.display(),
            self.entitlements.borrow().len(),
            self.currency
        )
    }
}
