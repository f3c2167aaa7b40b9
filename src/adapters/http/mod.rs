//! HTTP adapters - HTML endpoints for the survey flow.

pub mod middleware;
pub mod survey;

// Re-export key types for convenience
pub use survey::SurveyAppState;
pub use survey::survey_router;
