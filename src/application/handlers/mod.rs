//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod survey;

pub use survey::{
    FlowStep, StartSurveyCommand, StartSurveyHandler, StartSurveyResult, SubmitAnswerCommand,
    SubmitAnswerHandler, SurveyFlowError, ViewQuestionHandler, ViewQuestionQuery,
};
