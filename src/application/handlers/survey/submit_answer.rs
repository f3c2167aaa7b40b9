//! SubmitAnswerHandler - Command handler for answer submissions.

use std::sync::Arc;

use crate::domain::foundation::VisitorId;
use crate::domain::navigation::Navigator;
use crate::ports::VisitorSessionStore;

use super::errors::SurveyFlowError;
use super::{apply_outcome, load_or_new, FlowStep};

/// Command to answer question `requested` with `choice`.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub visitor_id: VisitorId,
    /// `None` when the requested index could not be parsed.
    pub requested: Option<usize>,
    pub choice: Option<String>,
}

/// Handler for submitting answers.
pub struct SubmitAnswerHandler {
    store: Arc<dyn VisitorSessionStore>,
    navigator: Navigator,
}

impl SubmitAnswerHandler {
    pub fn new(store: Arc<dyn VisitorSessionStore>, navigator: Navigator) -> Self {
        Self { store, navigator }
    }

    pub async fn handle(&self, cmd: SubmitAnswerCommand) -> Result<FlowStep, SurveyFlowError> {
        let mut session = load_or_new(self.store.as_ref(), &cmd.visitor_id).await?;
        session.touch();

        let outcome =
            self.navigator
                .submit(session.answer_count(), cmd.requested, cmd.choice.as_deref());
        let step = apply_outcome(&mut session, outcome, self.navigator.question_count());

        self.store.save(&session).await?;
        Ok(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session_store::InMemorySessionStore;
    use crate::application::handlers::survey::test_support::{survey_of, FailingStore};
    use crate::domain::visitor::{Notice, VisitorSession};

    struct Fixture {
        store: Arc<InMemorySessionStore>,
        handler: SubmitAnswerHandler,
        visitor_id: VisitorId,
    }

    impl Fixture {
        async fn new(answers: &[&str]) -> Self {
            let store = Arc::new(InMemorySessionStore::new(60));
            let visitor_id = VisitorId::new();
            let mut session = VisitorSession::new(visitor_id);
            for a in answers {
                session.record_answer(*a);
            }
            store.save(&session).await.unwrap();
            let handler = SubmitAnswerHandler::new(store.clone(), Navigator::new(survey_of(3)));
            Self {
                store,
                handler,
                visitor_id,
            }
        }

        async fn submit(&self, requested: usize, choice: Option<&str>) -> FlowStep {
            self.handler
                .handle(SubmitAnswerCommand {
                    visitor_id: self.visitor_id,
                    requested: Some(requested),
                    choice: choice.map(str::to_string),
                })
                .await
                .unwrap()
        }

        async fn session(&self) -> VisitorSession {
            self.store.load(&self.visitor_id).await.unwrap().unwrap()
        }
    }

    #[tokio::test]
    async fn valid_answer_is_recorded_and_advances() {
        let fx = Fixture::new(&[]).await;

        let step = fx.submit(0, Some("Yes")).await;

        assert_eq!(step, FlowStep::RedirectTo { index: 1 });
        assert_eq!(fx.session().await.answers(), &["Yes".to_string()]);
    }

    #[tokio::test]
    async fn final_answer_shows_thank_you() {
        let fx = Fixture::new(&["Yes", "No"]).await;

        let step = fx.submit(2, Some("Yes")).await;

        assert!(matches!(step, FlowStep::ShowComplete { .. }));
        assert_eq!(fx.session().await.answer_count(), 3);
    }

    #[tokio::test]
    async fn missing_answer_redirects_without_change_or_warning() {
        let fx = Fixture::new(&["Yes"]).await;

        let step = fx.submit(1, None).await;

        assert_eq!(step, FlowStep::RedirectTo { index: 1 });
        let session = fx.session().await;
        assert_eq!(session.answer_count(), 1);
        assert!(session.pending_notices().is_empty());
    }

    #[tokio::test]
    async fn undeclared_choice_is_not_recorded() {
        let fx = Fixture::new(&[]).await;

        let step = fx.submit(0, Some("Maybe")).await;

        assert_eq!(step, FlowStep::RedirectTo { index: 0 });
        assert_eq!(fx.session().await.answer_count(), 0);
    }

    #[tokio::test]
    async fn out_of_sequence_submit_warns_and_does_not_record() {
        let fx = Fixture::new(&["Yes"]).await;

        let step = fx.submit(0, Some("No")).await;

        assert_eq!(step, FlowStep::RedirectTo { index: 1 });
        let session = fx.session().await;
        assert_eq!(session.answers(), &["Yes".to_string()]);
        assert_eq!(session.pending_notices(), &[Notice::invalid_question()]);
    }

    #[tokio::test]
    async fn submit_after_completion_does_not_record() {
        let fx = Fixture::new(&["Yes", "No", "Yes"]).await;

        let step = fx.submit(3, Some("No")).await;

        assert!(matches!(step, FlowStep::ShowComplete { .. }));
        assert_eq!(fx.session().await.answer_count(), 3);
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let handler =
            SubmitAnswerHandler::new(Arc::new(FailingStore), Navigator::new(survey_of(3)));
        let result = handler
            .handle(SubmitAnswerCommand {
                visitor_id: VisitorId::new(),
                requested: Some(0),
                choice: Some("Yes".to_string()),
            })
            .await;
        assert!(matches!(result, Err(SurveyFlowError::Store(_))));
    }
}
