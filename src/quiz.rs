//! Quiz attempts: one answer per question, graded on submission, sealed
//! afterwards.
//!
//! Attempts are transient. Each time a quiz is opened a fresh attempt is
//! created; nothing is persisted across opens and there is no partial
//! credit, time limit, or multi-attempt averaging.

use crate::error::{AccessError, Result};
use crate::models::Question;

/// One run through a quiz's questions.
#[derive(Debug)]
pub struct QuizAttempt {
    questions: Vec<Question>,
    selections: Vec<Option<usize>>,
    results: Option<Vec<bool>>,
}

impl QuizAttempt {
    /// Open a fresh attempt with all answers unset.
    pub fn open(questions: &[Question]) -> Self {
        Self {
            questions: questions.to_vec(),
            selections: vec![None; questions.len()],
            results: None,
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// The currently selected option for a question, if any.
    pub fn selection(&self, question: usize) -> Option<usize> {
        self.selections.get(question).copied().flatten()
    }

    /// Select (or change) the answer to one question.
    ///
    /// Rejected with [`AccessError::AttemptSealed`] once the attempt has
    /// been submitted, and with `InvalidArgument` for out-of-range indices.
    pub fn select(&mut self, question: usize, option: usize) -> Result<()> {
        if self.is_submitted() {
            return Err(AccessError::AttemptSealed);
        }
        let q = self.questions.get(question).ok_or_else(|| {
            AccessError::InvalidArgument(format!(
                "question index {} out of range for {} questions",
                question,
                self.questions.len()
            ))
        })?;
        if option >= q.options.len() {
            return Err(AccessError::InvalidArgument(format!(
                "option index {} out of range for {} options",
                option,
                q.options.len()
            )));
        }
        self.selections[question] = Some(option);
        Ok(())
    }

    /// Grade the attempt and seal it.
    ///
    /// Every question must have a selected option; otherwise the submission
    /// is rejected with [`AccessError::IncompleteAttempt`] naming the first
    /// unanswered question, and no correctness vector is produced. A second
    /// submit is rejected with [`AccessError::AttemptSealed`].
    pub fn submit(&mut self) -> Result<&[bool]> {
        if self.is_submitted() {
            return Err(AccessError::AttemptSealed);
        }
        if let Some(missing) = self.selections.iter().position(|s| s.is_none()) {
            return Err(AccessError::IncompleteAttempt { question: missing });
        }

        let results: Vec<bool> = self
            .questions
            .iter()
            .zip(&self.selections)
            .map(|(q, sel)| *sel == Some(q.correct_option))
            .collect();
        self.results = Some(results);

        Ok(self.results.as_deref().unwrap_or_default())
    }

    pub fn is_submitted(&self) -> bool {
        self.results.is_some()
    }

    /// Per-question correctness vector, present only after submission.
    pub fn results(&self) -> Option<&[bool]> {
        self.results.as_deref()
    }

    /// `(correct, total)` after submission.
    pub fn score(&self) -> Option<(usize, usize)> {
        self.results
            .as_ref()
            .map(|r| (r.iter().filter(|c| **c).count(), r.len()))
    }
}
