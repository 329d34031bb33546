//! Playback progress tracking.

use crate::error::{AccessError, Result};
use crate::AccessSdk;

/// Progress tracker interface, borrowed from the SDK.
///
/// Recorded on every playback tick and read once when a video is reopened.
/// Resume display only — progress never gates access.
pub struct Progress<'a> {
    sdk: &'a AccessSdk,
}

impl<'a> Progress<'a> {
    pub(crate) fn new(sdk: &'a AccessSdk) -> Self {
        Self { sdk }
    }

    /// Overwrite the stored fraction for `video_id`.
    ///
    /// Last write wins; no monotonic clamp, since seeking backward
    /// legitimately lowers the value. Fractions outside `[0, 1]` are
    /// rejected.
    pub fn record(&self, video_id: &str, fraction: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&fraction) || fraction.is_nan() {
            return Err(AccessError::InvalidArgument(format!(
                "playback fraction {} outside [0, 1]",
                fraction
            )));
        }
        self.sdk.progress.borrow_mut().record(video_id, fraction)
    }

    /// The stored fraction for `video_id`, or `0.0` if never recorded.
    pub fn get(&self, video_id: &str) -> f64 {
        self.sdk.progress.borrow().get(video_id)
    }
}
