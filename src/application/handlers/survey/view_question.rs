//! ViewQuestionHandler - Query handler for question pages.
//!
//! Viewing never changes answers, but an out-of-sequence request queues a
//! warning and every rendered page drains pending notices.

use std::sync::Arc;

use crate::domain::foundation::VisitorId;
use crate::domain::navigation::Navigator;
use crate::ports::VisitorSessionStore;

use super::errors::SurveyFlowError;
use super::{apply_outcome, load_or_new, FlowStep};

/// Query for question page `requested`.
#[derive(Debug, Clone)]
pub struct ViewQuestionQuery {
    pub visitor_id: VisitorId,
    /// `None` when the requested index could not be parsed.
    pub requested: Option<usize>,
}

/// Handler for viewing questions.
pub struct ViewQuestionHandler {
    store: Arc<dyn VisitorSessionStore>,
    navigator: Navigator,
}

impl ViewQuestionHandler {
    pub fn new(store: Arc<dyn VisitorSessionStore>, navigator: Navigator) -> Self {
        Self { store, navigator }
    }

    pub async fn handle(&self, query: ViewQuestionQuery) -> Result<FlowStep, SurveyFlowError> {
        let mut session = load_or_new(self.store.as_ref(), &query.visitor_id).await?;
        session.touch();

        let outcome = self.navigator.view(session.answer_count(), query.requested);
        let step = apply_outcome(&mut session, outcome, self.navigator.question_count());

        self.store.save(&session).await?;
        Ok(step)
    }
}
