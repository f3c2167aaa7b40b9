//! survey-flow server binary.
//!
//! Reads configuration from `SURVEY_FLOW__*` environment variables (and
//! `.env` when present), then serves the survey over HTTP.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use survey_flow::adapters::http::middleware::VisitorCookieState;
use survey_flow::adapters::http::survey::{survey_router, SurveyAppState};
use survey_flow::adapters::session_store::InMemorySessionStore;
use survey_flow::config::AppConfig;
use survey_flow::ports::VisitorSessionStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config.validate()?;
    tracing::info!(
        environment = ?config.server.environment,
        "Configuration loaded"
    );

    let survey = Arc::new(config.survey.load_survey()?);
    tracing::info!(
        title = %survey.title(),
        questions = survey.question_count(),
        "Survey loaded"
    );

    let store = Arc::new(InMemorySessionStore::new(config.session.idle_timeout_secs));
    spawn_purge_task(
        store.clone(),
        Duration::from_secs(config.session.purge_interval_secs),
    );

    let state = SurveyAppState::new(survey, store, config.survey.validate_choices);
    let visitor = VisitorCookieState::from_config(&config.session);

    let app = survey_router(state, visitor)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("survey-flow listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("survey-flow stopped");
    Ok(())
}

/// Periodically drop sessions that have been idle past the timeout.
fn spawn_purge_task(store: Arc<InMemorySessionStore>, every: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        // The first tick completes immediately.
        interval.tick().await;
        loop {
            interval.tick().await;
            match store.purge_expired().await {
                Ok(0) => {}
                Ok(purged) => tracing::debug!(purged, "Purged expired visitor sessions"),
                Err(e) => tracing::warn!("Session purge failed: {}", e),
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
