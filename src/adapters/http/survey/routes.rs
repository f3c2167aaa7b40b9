//! HTTP routes for survey endpoints.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::adapters::http::middleware::{visitor_middleware, VisitorCookieState};

use super::handlers::{
    health, start_page, start_survey, submit_answer, view_question, SurveyAppState,
};

/// Canonical URL of question `index`.
pub fn question_path(index: usize) -> String {
    format!("/questions/{}", index)
}

/// Creates the survey router with all endpoints.
///
/// Routes:
/// - `GET /` - Reset answers, show title and instructions
/// - `POST /start` - Reset answers, redirect to the first question
/// - `GET /questions/:index` - Show the awaited question
/// - `POST /questions/:index` - Submit an answer (`answer` form field)
/// - `GET /health` - Liveness probe, no visitor cookie
pub fn survey_router(state: SurveyAppState, visitor: VisitorCookieState) -> Router {
    Router::new()
        .route("/", get(start_page))
        .route("/start", post(start_survey))
        .route(
            "/questions/:index",
            get(view_question).post(submit_answer),
        )
        .layer(middleware::from_fn_with_state(visitor, visitor_middleware))
        .with_state(state)
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::middleware::CookieSigner;
    use crate::adapters::session_store::InMemorySessionStore;
    use crate::domain::foundation::VisitorId;
    use crate::domain::survey::{Question, Survey};
    use crate::domain::visitor::VisitorSession;
    use crate::ports::VisitorSessionStore;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use std::sync::Arc;
    use tower::ServiceExt;

    const TEST_SECRET: &str = "test-cookie-secret-with-enough-bytes";

    struct TestApp {
        router: Router,
        store: Arc<InMemorySessionStore>,
        cookie: String,
        visitor_id: VisitorId,
    }

    impl TestApp {
        fn new() -> Self {
            let questions = vec![
                Question::yes_no("First?").unwrap(),
                Question::yes_no("Second?").unwrap(),
            ];
            let survey = Arc::new(Survey::new("Route Test", "Go.", questions).unwrap());
            let store = Arc::new(InMemorySessionStore::new(60));
            let visitor =
                VisitorCookieState::new(CookieSigner::new(TEST_SECRET), "survey_session", false);
            let visitor_id = VisitorId::new();
            let cookie = format!("survey_session={}", visitor.signer().sign(&visitor_id));
            let state = SurveyAppState::new(survey, store.clone(), true);

            Self {
                router: survey_router(state, visitor),
                store,
                cookie,
                visitor_id,
            }
        }

        async fn get(&self, uri: &str) -> Response {
            self.router
                .clone()
                .oneshot(
                    Request::builder()
                        .uri(uri)
                        .header(header::COOKIE, &self.cookie)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap()
        }

        async fn post_form(&self, uri: &str, body: &str) -> Response {
            self.router
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri(uri)
                        .header(header::COOKIE, &self.cookie)
                        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                        .body(Body::from(body.to_string()))
                        .unwrap(),
                )
                .await
                .unwrap()
        }

        async fn session(&self) -> VisitorSession {
            self.store.load(&self.visitor_id).await.unwrap().unwrap()
        }
    }

    fn location(response: &Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    #[tokio::test]
    async fn root_renders_start_page() {
        let app = TestApp::new();
        let response = app.get("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(app.session().await.answer_count(), 0);
    }

    #[tokio::test]
    async fn start_redirects_to_first_question() {
        let app = TestApp::new();
        let response = app.post_form("/start", "").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/questions/0");
    }

    #[tokio::test]
    async fn non_numeric_index_redirects_to_progress() {
        let app = TestApp::new();
        let response = app.get("/questions/abc").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/questions/0");
    }

    #[tokio::test]
    async fn submit_without_body_is_missing_answer() {
        let app = TestApp::new();
        let response = app
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/questions/0")
                    .header(header::COOKIE, &app.cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/questions/0");
        assert!(app.session().await.pending_notices().is_empty());
    }

    #[tokio::test]
    async fn full_walkthrough_reaches_thank_you() {
        let app = TestApp::new();
        app.get("/").await;

        let response = app.post_form("/questions/0", "answer=Yes").await;
        assert_eq!(location(&response), "/questions/1");

        let response = app.post_form("/questions/1", "answer=No").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            app.session().await.answers(),
            &["Yes".to_string(), "No".to_string()]
        );

        let response = app.get("/questions/2").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_needs_no_cookie() {
        let app = TestApp::new();
        let response = app
            .router
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }
}
