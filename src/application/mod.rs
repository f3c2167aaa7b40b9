//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers change a visitor's session; query handlers only drain
//! notices and refresh activity.

pub mod handlers;

pub use handlers::{
    FlowStep, StartSurveyCommand, StartSurveyHandler, StartSurveyResult, SubmitAnswerCommand,
    SubmitAnswerHandler, SurveyFlowError, ViewQuestionHandler, ViewQuestionQuery,
};
