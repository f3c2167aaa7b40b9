//! Navigation error taxonomy.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Reasons a request did not render or record what it asked for.
///
/// All of these are recovered locally by redirecting the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Requested index does not match progress. `requested` is `None` when
    /// the path segment was not a valid index at all.
    #[error("Question {requested:?} requested while question {expected} is awaited")]
    OutOfSequence {
        requested: Option<usize>,
        expected: usize,
    },

    /// Submission carried no choice.
    #[error("No answer submitted for question {index}")]
    MissingAnswer { index: usize },

    /// Submission carried a label the question does not offer.
    #[error("'{choice}' is not a choice for question {index}")]
    InvalidChoice { index: usize, choice: String },

    /// Progress points past the end of the survey.
    #[error("Progress {answered} exceeds survey length {count}")]
    ProgressOutOfRange { answered: usize, count: usize },
}

impl NavigationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            NavigationError::OutOfSequence { .. } => ErrorCode::OutOfSequence,
            NavigationError::MissingAnswer { .. } => ErrorCode::MissingAnswer,
            NavigationError::InvalidChoice { .. } => ErrorCode::InvalidChoice,
            NavigationError::ProgressOutOfRange { .. } => ErrorCode::QuestionOutOfRange,
        }
    }

    /// True if the visitor should see the invalid-question warning.
    pub fn warns_visitor(&self) -> bool {
        matches!(
            self,
            NavigationError::OutOfSequence { .. } | NavigationError::ProgressOutOfRange { .. }
        )
    }
}
