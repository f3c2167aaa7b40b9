//! Survey command and query handlers.
//!
//! Each handler loads the visitor's session, asks the `Navigator` what to do,
//! applies the outcome, and saves the session back.

mod errors;
mod start_survey;
mod submit_answer;
mod view_question;

pub use errors::SurveyFlowError;
pub use start_survey::{StartSurveyCommand, StartSurveyHandler, StartSurveyResult};
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler};
pub use view_question::{ViewQuestionHandler, ViewQuestionQuery};

use crate::domain::foundation::VisitorId;
use crate::domain::navigation::NavigationOutcome;
use crate::domain::survey::Question;
use crate::domain::visitor::{Notice, VisitorSession};
use crate::ports::VisitorSessionStore;

/// Next step for the visitor after a question request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowStep {
    /// Render question `index` of `question_count`.
    ShowQuestion {
        index: usize,
        question_count: usize,
        question: Question,
        notices: Vec<Notice>,
    },
    /// Render the thank-you page.
    ShowComplete { notices: Vec<Notice> },
    /// Redirect to question `index`.
    RedirectTo { index: usize },
}

/// Load the visitor's session, or start a fresh one if there is none.
async fn load_or_new(
    store: &dyn VisitorSessionStore,
    visitor_id: &VisitorId,
) -> Result<VisitorSession, SurveyFlowError> {
    Ok(store
        .load(visitor_id)
        .await?
        .unwrap_or_else(|| VisitorSession::new(*visitor_id)))
}

/// Apply a navigation outcome to the session and pick the next step.
///
/// Rendered steps drain the session's pending notices; redirects leave them
/// queued for the page the visitor lands on.
fn apply_outcome(
    session: &mut VisitorSession,
    outcome: NavigationOutcome,
    question_count: usize,
) -> FlowStep {
    match outcome {
        NavigationOutcome::ShowQuestion { index, question } => FlowStep::ShowQuestion {
            index,
            question_count,
            question,
            notices: session.take_notices(),
        },
        NavigationOutcome::ShowComplete => FlowStep::ShowComplete {
            notices: session.take_notices(),
        },
        NavigationOutcome::Record { answer, next } => {
            session.record_answer(answer);
            tracing::info!(
                visitor = %session.visitor_id(),
                answers = ?session.answers(),
                "Answer recorded"
            );
            match next {
                Some(index) => FlowStep::RedirectTo { index },
                None => FlowStep::ShowComplete {
                    notices: session.take_notices(),
                },
            }
        }
        NavigationOutcome::Redirect { to, error } => {
            if error.warns_visitor() {
                session.push_notice(Notice::invalid_question());
            }
            tracing::debug!(
                visitor = %session.visitor_id(),
                code = %error.code(),
                redirect_to = to,
                "{}",
                error
            );
            FlowStep::RedirectTo { index: to }
        }
    }
}
