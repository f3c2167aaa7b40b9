//! HTTP adapter for survey endpoints.

mod dto;
mod handlers;
mod pages;
mod routes;

pub use dto::AnswerForm;
pub use handlers::SurveyAppState;
pub use pages::escape_html;
pub use routes::{question_path, survey_router};
