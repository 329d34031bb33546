//! Catalog models: the three lockable content granularities and quiz questions.
//!
//! Catalog data is supplied read-only by the surrounding CRUD layer. `locked`
//! deserializes to `false` when absent, so content is open unless explicitly
//! marked premium.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AccessError, Result};

// ---------------------------------------------------------------------------
// ContentKind
// ---------------------------------------------------------------------------

/// The three granularities at which content can be locked and unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Video,
    Course,
    Section,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Video => write!(f, "video"),
            ContentKind::Course => write!(f, "course"),
            ContentKind::Section => write!(f, "section"),
        }
    }
}

// ---------------------------------------------------------------------------
// ContentUnit
// ---------------------------------------------------------------------------

/// The resolver's view of the catalog: kind, identity, lock flag, and price.
///
/// Implemented by [`Video`], [`Course`], and [`Section`]; the locking
/// resolver and the payment workflow accept any implementor, keeping them
/// independent of the concrete catalog shape.
pub trait ContentUnit {
    fn kind(&self) -> ContentKind;
    fn content_id(&self) -> &str;
    fn is_locked(&self) -> bool;
    /// Price in currency minor units. Meaningful only when locked.
    fn price(&self) -> u64;
}

// ---------------------------------------------------------------------------
// Video
// ---------------------------------------------------------------------------

/// A single standalone lecture video.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    /// Playable source reference (stream or file URL); opaque to the engine.
    pub source_url: String,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub price: u64,
}

impl ContentUnit for Video {
    fn kind(&self) -> ContentKind {
        ContentKind::Video
    }
    fn content_id(&self) -> &str {
        &self.id
    }
    fn is_locked(&self) -> bool {
        self.locked
    }
    fn price(&self) -> u64 {
        self.price
    }
}

// ---------------------------------------------------------------------------
// Course / Section
// ---------------------------------------------------------------------------

/// An ordered series of sections, each independently lockable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub price: u64,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Course {
    /// Fill in missing section ids as `"{courseId}-s{n}"`.
    ///
    /// Exists only to ingest legacy catalogs whose sections shipped without
    /// ids. Position-derived ids are unstable under reordering, so new
    /// content must carry explicit ids and never rely on this.
    pub fn assign_section_ids(&mut self) {
        for (i, section) in self.sections.iter_mut().enumerate() {
            if section.id.is_empty() {
                section.id = format!("{}-s{}", self.id, i + 1);
            }
        }
    }
}

impl ContentUnit for Course {
    fn kind(&self) -> ContentKind {
        ContentKind::Course
    }
    fn content_id(&self) -> &str {
        &self.id
    }
    fn is_locked(&self) -> bool {
        self.locked
    }
    fn price(&self) -> u64 {
        self.price
    }
}

/// What a section contains: a playable video or a quiz question set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "sectionType")]
pub enum SectionBody {
    Video { video: Video },
    Quiz { questions: Vec<Question> },
}

/// One entry in a course's fixed section order.
///
/// Section ids are stable, explicitly assigned identifiers; a section's lock
/// is independent of its owning course's lock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub price: u64,
    #[serde(flatten)]
    pub body: SectionBody,
}

impl ContentUnit for Section {
    fn kind(&self) -> ContentKind {
        ContentKind::Section
    }
    fn content_id(&self) -> &str {
        &self.id
    }
    fn is_locked(&self) -> bool {
        self.locked
    }
    fn price(&self) -> u64 {
        self.price
    }
}

// ---------------------------------------------------------------------------
// Question
// ---------------------------------------------------------------------------

/// A single multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option: usize,
}

impl Question {
    /// Construct a question, validating that there are at least two options
    /// and that `correct_option` indexes one of them.
    pub fn new(prompt: &str, options: &[&str], correct_option: usize) -> Result<Self> {
        if options.len() < 2 {
            return Err(AccessError::InvalidArgument(format!(
                "question '{}' needs at least 2 options, got {}",
                prompt,
                options.len()
            )));
        }
        if correct_option >= options.len() {
            return Err(AccessError::InvalidArgument(format!(
                "correct option index {} out of range for {} options",
                correct_option,
                options.len()
            )));
        }
        Ok(Self {
            prompt: prompt.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct_option,
        })
    }
}
