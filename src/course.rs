//! Course navigation.
//!
//! A course session lists its sections in fixed order; every section
//! resolves through the locking policy on its own `(section, id)` pair — a
//! course-level unlock does not cascade to sections. Entering a video
//! section marks it completed optimistically on open: completion is a
//! coarse "visited" flag, not a playthrough guarantee.

use crate::error::{AccessError, Result};
use crate::models::{ContentKind, ContentUnit, Course, Section, SectionBody};
use crate::quiz::QuizAttempt;
use crate::resolver::Access;
use crate::AccessSdk;

/// What the UI receives when it enters an unlocked section.
#[derive(Debug)]
pub enum SectionEntry {
    /// A playable video plus the fraction to resume from.
    Video { source_url: String, resume: f64 },
    /// A fresh quiz attempt.
    Quiz(QuizAttempt),
}

/// An open course, borrowed from the SDK.
pub struct CourseSession<'a> {
    sdk: &'a AccessSdk,
    course: Course,
    completed: Vec<bool>,
}

impl<'a> CourseSession<'a> {
    pub(crate) fn new(sdk: &'a AccessSdk, course: Course) -> Self {
        let completed = vec![false; course.sections.len()];
        Self {
            sdk,
            course,
            completed,
        }
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn len(&self) -> usize {
        self.course.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.course.sections.is_empty()
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.course.sections.get(index)
    }

    /// Resolve the course-level lock itself.
    pub fn course_access(&self) -> Access {
        self.sdk.resolve(&self.course)
    }

    /// Resolve section `index` independently of the course lock.
    pub fn section_access(&self, index: usize) -> Result<Access> {
        let section = self.section_at(index)?;
        Ok(self.sdk.resolve(section))
    }

    /// Enter section `index`.
    ///
    /// A locked section is rejected with [`AccessError::PaymentRequired`].
    /// A video section is marked completed on open and returns its playable
    /// reference with the stored resume fraction; a quiz section returns a
    /// fresh [`QuizAttempt`].
    pub fn enter(&mut self, index: usize) -> Result<SectionEntry> {
        let section = self.section_at(index)?;
        if self.sdk.resolve(section) == Access::RequirePayment {
            return Err(AccessError::PaymentRequired {
                kind: ContentKind::Section,
                id: section.id.clone(),
                price: section.price(),
            });
        }
        let body = section.body.clone();

        match body {
            SectionBody::Video { video } => {
                self.completed[index] = true;
                Ok(SectionEntry::Video {
                    resume: self.sdk.progress().get(&video.id),
                    source_url: video.source_url,
                })
            }
            SectionBody::Quiz { questions } => {
                Ok(SectionEntry::Quiz(QuizAttempt::open(&questions)))
            }
        }
    }

    /// Whether section `index` has been visited in this session.
    pub fn completed(&self, index: usize) -> bool {
        self.completed.get(index).copied().unwrap_or(false)
    }

    fn section_at(&self, index: usize) -> Result<&Section> {
        self.course.sections.get(index).ok_or_else(|| {
            AccessError::NotFound(format!(
                "course '{}' has no section {} ({} sections)",
                self.course.id,
                index,
                self.course.sections.len()
            ))
        })
    }
}
