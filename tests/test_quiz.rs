//! Quiz engine tests: answer collection, submission validation, grading,
//! and post-submit immutability.

mod common;

use medlearn_access::models::Question;
use medlearn_access::{AccessError, QuizAttempt};

// ---------------------------------------------------------------------------
// Answer collection
// ---------------------------------------------------------------------------

#[test]
fn fresh_attempt_has_no_selections() {
    let attempt = QuizAttempt::open(&common::questions());

    assert_eq!(attempt.question_count(), 2);
    assert!(!attempt.is_submitted());
    assert_eq!(attempt.selection(0), None);
    assert_eq!(attempt.selection(1), None);
    assert!(attempt.results().is_none());
}

#[test]
fn selections_can_be_changed_before_submission() {
    let mut attempt = QuizAttempt::open(&common::questions());

    attempt.select(0, 0).unwrap();
    attempt.select(0, 1).unwrap();
    assert_eq!(attempt.selection(0), Some(1));
}

#[test]
fn out_of_range_indices_are_rejected() {
    let mut attempt = QuizAttempt::open(&common::questions());

    assert!(matches!(
        attempt.select(5, 0),
        Err(AccessError::InvalidArgument(_))
    ));
    assert!(matches!(
        attempt.select(0, 99),
        Err(AccessError::InvalidArgument(_))
    ));
}

// ---------------------------------------------------------------------------
// Submission validation (Scenario 4)
// ---------------------------------------------------------------------------

#[test]
fn incomplete_submission_is_rejected_naming_the_missing_question() {
    let mut attempt = QuizAttempt::open(&common::questions());
    attempt.select(0, 1).unwrap();

    let err = attempt.submit().unwrap_err();
    assert!(matches!(err, AccessError::IncompleteAttempt { question: 1 }));

    // No correctness vector is produced and the attempt stays open.
    assert!(!attempt.is_submitted());
    assert!(attempt.results().is_none());
    attempt.select(1, 0).unwrap();
    attempt.submit().unwrap();
}

// ---------------------------------------------------------------------------
// Grading
// ---------------------------------------------------------------------------

#[test]
fn all_correct_selections_grade_all_true() {
    let mut attempt = QuizAttempt::open(&common::questions());
    attempt.select(0, 1).unwrap();
    attempt.select(1, 0).unwrap();

    let results = attempt.submit().unwrap().to_vec();
    assert_eq!(results, vec![true, true]);
    assert_eq!(attempt.score(), Some((2, 2)));
}

#[test]
fn grading_is_per_question() {
    let mut attempt = QuizAttempt::open(&common::questions());
    attempt.select(0, 1).unwrap(); // correct
    attempt.select(1, 1).unwrap(); // wrong

    let results = attempt.submit().unwrap().to_vec();
    assert_eq!(results, vec![true, false]);
    assert_eq!(attempt.score(), Some((1, 2)));
}

// ---------------------------------------------------------------------------
// Post-submit immutability
// ---------------------------------------------------------------------------

#[test]
fn submitted_attempt_is_sealed() {
    let mut attempt = QuizAttempt::open(&common::questions());
    attempt.select(0, 1).unwrap();
    attempt.select(1, 1).unwrap();
    attempt.submit().unwrap();

    // Neither a new selection nor a second submit changes anything.
    assert!(matches!(
        attempt.select(0, 0),
        Err(AccessError::AttemptSealed)
    ));
    assert!(matches!(attempt.submit(), Err(AccessError::AttemptSealed)));

    assert_eq!(attempt.selection(0), Some(1));
    assert_eq!(attempt.results().unwrap(), &[true, false]);
}

#[test]
fn each_open_is_an_independent_attempt() {
    let questions = common::questions();

    let mut first = QuizAttempt::open(&questions);
    first.select(0, 1).unwrap();
    first.select(1, 0).unwrap();
    first.submit().unwrap();

    let second = QuizAttempt::open(&questions);
    assert!(!second.is_submitted());
    assert_eq!(second.selection(0), None);
}

// ---------------------------------------------------------------------------
// Question construction
// ---------------------------------------------------------------------------

#[test]
fn question_requires_two_options_and_a_valid_answer() {
    assert!(matches!(
        Question::new("?", &["only one"], 0),
        Err(AccessError::InvalidArgument(_))
    ));
    assert!(matches!(
        Question::new("?", &["a", "b"], 2),
        Err(AccessError::InvalidArgument(_))
    ));
    assert!(Question::new("?", &["a", "b"], 1).is_ok());
}
