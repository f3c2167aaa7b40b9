//! Application-level errors for the survey flow.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::ports::SessionStoreError;

/// Failures that abort a survey request.
///
/// Navigation problems are not errors at this level: they become redirects.
#[derive(Debug, Error)]
pub enum SurveyFlowError {
    #[error("Session store failure: {0}")]
    Store(#[from] SessionStoreError),
}

impl SurveyFlowError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SurveyFlowError::Store(_) => ErrorCode::SessionStoreError,
        }
    }
}
