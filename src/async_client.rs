//! Async wrapper around [`AccessSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking order-creation and verification calls are in flight.
//!
//! # Example
//!
//! ```no_run
//! use medlearn_access::AsyncAccessSdk;
//! use medlearn_access::models::ContentKind;
//!
//! async fn example() -> medlearn_access::Result<()> {
//!     let sdk = AsyncAccessSdk::builder()
//!         .backend_url("https://medlearn.example/api/payments")
//!         .build()
//!         .await?;
//!
//!     // Run any sync SDK operation via closure
//!     let _owned = sdk
//!         .run(|s| Ok(s.entitlements().is_unlocked(ContentKind::Video, "v1")))
//!         .await?;
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{AccessError, Result};
use crate::payment::PaymentRail;
use crate::AccessSdk;

// ---------------------------------------------------------------------------
// AsyncAccessSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncAccessSdk`] instance.
pub struct AsyncAccessSdkBuilder {
    store_dir: Option<PathBuf>,
    backend_url: Option<String>,
    rail: Option<Box<dyn PaymentRail>>,
    timeout: Option<Duration>,
    currency: Option<String>,
}

impl Default for AsyncAccessSdkBuilder {
    fn default() -> Self {
        Self {
            store_dir: None,
            backend_url: None,
            rail: None,
            timeout: None,
            currency: None,
        }
    }
}

impl AsyncAccessSdkBuilder {
    /// Set a custom directory for the entitlement and progress files.
    pub fn store_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.store_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Base URL of the payment backend.
    pub fn backend_url(mut self, url: &str) -> Self {
        self.backend_url = Some(url.to_string());
        self
    }

    /// Supply a custom [`PaymentRail`] instead of the HTTP backend.
    pub fn rail(mut self, rail: impl PaymentRail + 'static) -> Self {
        self.rail = Some(Box::new(rail));
        self
    }

    /// Timeout for order-creation and verification calls.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Currency code for created orders.
    pub fn currency(mut self, currency: &str) -> Self {
        self.currency = Some(currency.to_string());
        self
    }

    /// Build the async SDK, loading the stores on the blocking pool so the
    /// async event loop never waits on disk.
    pub async fn build(self) -> Result<AsyncAccessSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = AccessSdk::builder();
            if let Some(dir) = self.store_dir {
                builder = builder.store_dir(dir);
            }
            if let Some(url) = self.backend_url {
                builder = builder.backend_url(&url);
            }
            if let Some(rail) = self.rail {
                builder = builder.boxed_rail(rail);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(currency) = self.currency {
                builder = builder.currency(&currency);
            }
            let sdk = builder.build()?;
            Ok(AsyncAccessSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| AccessError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncAccessSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`AccessSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`AccessSdk`] is
/// protected by a [`Mutex`] since it uses `RefCell` internally.
pub struct AsyncAccessSdk {
    inner: Arc<Mutex<AccessSdk>>,
}

impl AsyncAccessSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncAccessSdkBuilder {
        AsyncAccessSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&AccessSdk` reference and should return a
    /// `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&AccessSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| AccessError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| AccessError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Record playback progress asynchronously.
    pub async fn record_progress(&self, video_id: &str, fraction: f64) -> Result<()> {
        let video_id = video_id.to_string();
        self.run(move |s| s.progress().record(&video_id, fraction))
            .await
    }

    /// Read playback progress asynchronously.
    pub async fn get_progress(&self, video_id: &str) -> Result<f64> {
        let video_id = video_id.to_string();
        self.run(move |s| Ok(s.progress().get(&video_id))).await
    }
}
