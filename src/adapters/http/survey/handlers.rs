//! HTTP handlers for survey endpoints.

use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::adapters::http::middleware::CurrentVisitor;
use crate::application::handlers::survey::{
    FlowStep, StartSurveyCommand, StartSurveyHandler, SubmitAnswerCommand, SubmitAnswerHandler,
    SurveyFlowError, ViewQuestionHandler, ViewQuestionQuery,
};
use crate::domain::navigation::Navigator;
use crate::domain::survey::Survey;
use crate::ports::VisitorSessionStore;

use super::dto::AnswerForm;
use super::pages;
use super::routes::question_path;

// ════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════

/// Shared state for survey routes.
#[derive(Clone)]
pub struct SurveyAppState {
    pub survey: Arc<Survey>,
    pub store: Arc<dyn VisitorSessionStore>,
    pub navigator: Navigator,
}

impl SurveyAppState {
    pub fn new(
        survey: Arc<Survey>,
        store: Arc<dyn VisitorSessionStore>,
        validate_choices: bool,
    ) -> Self {
        let navigator = Navigator::new(survey.clone()).with_choice_validation(validate_choices);
        Self {
            survey,
            store,
            navigator,
        }
    }

    pub fn start_handler(&self) -> StartSurveyHandler {
        StartSurveyHandler::new(self.store.clone())
    }

    pub fn view_handler(&self) -> ViewQuestionHandler {
        ViewQuestionHandler::new(self.store.clone(), self.navigator.clone())
    }

    pub fn submit_handler(&self) -> SubmitAnswerHandler {
        SubmitAnswerHandler::new(self.store.clone(), self.navigator.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Reset answers and show the start page
pub async fn start_page(
    State(state): State<SurveyAppState>,
    CurrentVisitor(visitor_id): CurrentVisitor,
) -> Response {
    let cmd = StartSurveyCommand {
        visitor_id,
        renders_page: true,
    };

    match state.start_handler().handle(cmd).await {
        Ok(result) => Html(pages::start_page(&state.survey, &result.notices)).into_response(),
        Err(e) => handle_flow_error(e),
    }
}

/// POST /start - Reset answers and go to the first question
pub async fn start_survey(
    State(state): State<SurveyAppState>,
    CurrentVisitor(visitor_id): CurrentVisitor,
) -> Response {
    let cmd = StartSurveyCommand {
        visitor_id,
        renders_page: false,
    };

    match state.start_handler().handle(cmd).await {
        Ok(_) => Redirect::to(&question_path(0)).into_response(),
        Err(e) => handle_flow_error(e),
    }
}

/// GET /questions/:index - Show the awaited question or redirect to it
pub async fn view_question(
    State(state): State<SurveyAppState>,
    CurrentVisitor(visitor_id): CurrentVisitor,
    Path(index): Path<String>,
) -> Response {
    let query = ViewQuestionQuery {
        visitor_id,
        requested: parse_index(&index),
    };

    match state.view_handler().handle(query).await {
        Ok(step) => render_step(&state.survey, step),
        Err(e) => handle_flow_error(e),
    }
}

/// POST /questions/:index - Record an answer for the awaited question
pub async fn submit_answer(
    State(state): State<SurveyAppState>,
    CurrentVisitor(visitor_id): CurrentVisitor,
    Path(index): Path<String>,
    form: Option<Form<AnswerForm>>,
) -> Response {
    let cmd = SubmitAnswerCommand {
        visitor_id,
        requested: parse_index(&index),
        choice: form.and_then(|Form(f)| f.answer),
    };

    match state.submit_handler().handle(cmd).await {
        Ok(step) => render_step(&state.survey, step),
        Err(e) => handle_flow_error(e),
    }
}

/// GET /health - Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

/// Non-numeric or negative segments parse to `None`, which the navigator
/// treats as out-of-sequence.
fn parse_index(segment: &str) -> Option<usize> {
    segment.parse().ok()
}

fn render_step(survey: &Survey, step: FlowStep) -> Response {
    match step {
        FlowStep::ShowQuestion {
            index,
            question_count,
            question,
            notices,
        } => Html(pages::question_page(
            survey,
            index,
            question_count,
            &question,
            &notices,
        ))
        .into_response(),
        FlowStep::ShowComplete { notices } => {
            Html(pages::thank_you_page(survey, &notices)).into_response()
        }
        FlowStep::RedirectTo { index } => Redirect::to(&question_path(index)).into_response(),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_flow_error(error: SurveyFlowError) -> Response {
    match error {
        SurveyFlowError::Store(ref e) => {
            tracing::error!(code = %error.code(), "Session store failure: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(pages::error_page(
                    "Your survey session could not be loaded. Please try again.",
                )),
            )
                .into_response()
        }
    }
}
