//! StartSurveyHandler - Command handler for (re)starting the survey.

use std::sync::Arc;

use crate::domain::foundation::VisitorId;
use crate::domain::visitor::Notice;
use crate::ports::VisitorSessionStore;

use super::errors::SurveyFlowError;
use super::load_or_new;

/// Command to reset a visitor's answers.
#[derive(Debug, Clone)]
pub struct StartSurveyCommand {
    pub visitor_id: VisitorId,
    /// True when the response is a rendered page, which consumes pending notices.
    pub renders_page: bool,
}

/// Result of a survey start.
#[derive(Debug, Clone, Default)]
pub struct StartSurveyResult {
    /// Notices to show on the rendered page. Empty when `renders_page` was false.
    pub notices: Vec<Notice>,
}

/// Handler for starting the survey.
pub struct StartSurveyHandler {
    store: Arc<dyn VisitorSessionStore>,
}

impl StartSurveyHandler {
    pub fn new(store: Arc<dyn VisitorSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: StartSurveyCommand,
    ) -> Result<StartSurveyResult, SurveyFlowError> {
        let mut session = load_or_new(self.store.as_ref(), &cmd.visitor_id).await?;

        session.reset_answers();
        session.touch();
        let notices = if cmd.renders_page {
            session.take_notices()
        } else {
            Vec::new()
        };

        self.store.save(&session).await?;
        tracing::debug!(visitor = %cmd.visitor_id, "Survey started");

        Ok(StartSurveyResult { notices })
    }
}
