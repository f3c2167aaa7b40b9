//! Survey domain module.
//!
//! A survey is an immutable, ordered list of single-choice questions plus a
//! title and instructions. It is loaded once at startup and shared read-only
//! by every request.

mod definition;
mod errors;
mod question;
mod satisfaction;

pub use definition::Survey;
pub use errors::SurveyError;
pub use question::{Question, DEFAULT_CHOICES};
pub use satisfaction::satisfaction_survey;
