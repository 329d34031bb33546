//! Durable stores for entitlements and playback progress.
//!
//! Both stores are small JSON files under the SDK's store directory, loaded
//! eagerly at construction and written through on every mutation. Writes go
//! to a temp file in the same directory and are renamed into place, so an
//! interrupted write never leaves a corrupt store behind. A corrupt file on
//! load is logged and treated as empty; the entitlement source of truth is
//! the remote verification service, so the worst case is a re-purchase
//! prompt that verification history can reconcile.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::Result;
use crate::models::ContentKind;

const ENTITLEMENTS_FILE: &str = "entitlements.json";
const PROGRESS_FILE: &str = "progress.json";

// ---------------------------------------------------------------------------
// EntitlementStore
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntitlementRecord {
    kind: ContentKind,
    id: String,
}

/// Durable set of `(kind, id)` pairs the viewer has paid for.
///
/// Grows monotonically; no revocation is modeled. Mutated only by the
/// payment workflow after server-side verification.
pub struct EntitlementStore {
    path: PathBuf,
    owned: HashSet<(ContentKind, String)>,
}

impl EntitlementStore {
    /// Load the full entitlement set from `entitlements.json` in `store_dir`,
    /// creating the directory if needed. The set is expected to be small, so
    /// it is loaded eagerly and kept in memory.
    pub fn open(store_dir: &Path) -> Result<Self> {
        fs::create_dir_all(store_dir)?;
        let path = store_dir.join(ENTITLEMENTS_FILE);
        let records: Vec<EntitlementRecord> = load_or_default(&path);
        let owned = records.into_iter().map(|r| (r.kind, r.id)).collect();
        Ok(Self { path, owned })
    }

    /// Whether the viewer owns `(kind, id)`.
    pub fn is_unlocked(&self, kind: ContentKind, id: &str) -> bool {
        self.owned.contains(&(kind, id.to_string()))
    }

    /// Record ownership of `(kind, id)` and persist.
    ///
    /// Idempotent: unlocking an already-owned pair is a no-op and does not
    /// rewrite the file.
    pub fn unlock(&mut self, kind: ContentKind, id: &str) -> Result<()> {
        if !self.owned.insert((kind, id.to_string())) {
            return Ok(());
        }
        let mut records: Vec<EntitlementRecord> = self
            .owned
            .iter()
            .map(|(kind, id)| EntitlementRecord {
                kind: *kind,
                id: id.clone(),
            })
            .collect();
        records.sort_by(|a, b| (a.kind, &a.id).cmp(&(b.kind, &b.id)));
        save_json(&self.path, &records)
    }

    /// Number of owned pairs.
    pub fn len(&self) -> usize {
        self.owned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }
}

// ---------------------------------------------------------------------------
// ProgressStore
// ---------------------------------------------------------------------------

/// Durable map from video id to last-seen playback fraction in `[0, 1]`.
///
/// Written on every playback tick; the latest write wins unconditionally
/// (seeking backward legitimately lowers the stored value). Read once when
/// a video is reopened, for resume display only — never to gate access.
pub struct ProgressStore {
    path: PathBuf,
    fractions: HashMap<String, f64>,
}

impl ProgressStore {
    pub fn open(store_dir: &Path) -> Result<Self> {
        fs::create_dir_all(store_dir)?;
        let path = store_dir.join(PROGRESS_FILE);
        let fractions = load_or_default(&path);
        Ok(Self { path, fractions })
    }

    /// Overwrite the stored fraction for `video_id` and persist.
    pub fn record(&mut self, video_id: &str, fraction: f64) -> Result<()> {
        self.fractions.insert(video_id.to_string(), fraction);
        save_json(&self.path, &self.fractions)
    }

    /// The stored fraction for `video_id`, or `0.0` if never seen.
    pub fn get(&self, video_id: &str) -> f64 {
        self.fractions.get(video_id).copied().unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// File helpers
// ---------------------------------------------------------------------------

/// Load and parse a store file, falling back to the default value if the
/// file is missing or corrupt. A corrupt file is removed so the next save
/// starts clean.
fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    if !path.exists() {
        return T::default();
    }
    let parsed = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|contents| serde_json::from_str(&contents).map_err(|e| e.to_string()));
    match parsed {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Corrupt store file {}: {} -- starting empty", path.display(), e);
            let _ = fs::remove_file(path);
            T::default()
        }
    }
}

/// Serialize `value` to a temp file in the target directory and rename it
/// into place.
fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut tmp, value)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
