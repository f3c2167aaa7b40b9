//! Survey-specific error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors raised while loading or reading a survey definition.
#[derive(Debug, Error)]
pub enum SurveyError {
    /// Requested a question past the end of the survey.
    #[error("Question index {index} is out of range for a survey of {count} questions")]
    QuestionOutOfRange { index: usize, count: usize },

    /// The definition violates a structural rule.
    #[error("Invalid survey definition: {0}")]
    Invalid(#[from] ValidationError),

    /// The definition file could not be read.
    #[error("Failed to read survey definition {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The definition could not be parsed as YAML.
    #[error("Failed to parse survey definition: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl SurveyError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SurveyError::QuestionOutOfRange { .. } => ErrorCode::QuestionOutOfRange,
            SurveyError::Invalid(_) | SurveyError::Parse(_) => ErrorCode::ValidationFailed,
            SurveyError::Io { .. } => ErrorCode::InternalError,
        }
    }
}
