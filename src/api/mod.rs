//! HTTP API: the single digest endpoint.
//!
//! `GET /news` runs the whole pipeline synchronously - curate, parse,
//! render, send - and reports the outcome as JSON. Every failure, whatever
//! its origin, is caught at this one boundary and surfaced as a generic
//! error message.

pub mod types;

pub use types::StatusResponse;

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::agent::{Agent, NewsAgent};
use crate::config::Config;
use crate::mailer::{MailTransport, SmtpMailer, RECIPIENT, SUBJECT};
use crate::render::render_report;
use crate::report::Report;

/// Shared state: the injected agent and mail transport.
pub struct AppState {
    pub agent: Arc<dyn NewsAgent>,
    pub mailer: Arc<dyn MailTransport>,
}

/// Build the router over the given state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/news", get(send_news))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server with the real agent and SMTP transport.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState {
        agent: Arc::new(Agent::new(&config)?),
        mailer: Arc::new(SmtpMailer::new(config.smtp.clone())),
    });

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// `GET /news` - trigger one digest run.
async fn send_news(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    match run_pipeline(state.as_ref()).await {
        Ok(()) => Json(StatusResponse::success("News digest sent successfully")),
        Err(err) => {
            error!(error = %err, "digest pipeline failed");
            Json(StatusResponse::error(err.to_string()))
        }
    }
}

async fn run_pipeline(state: &AppState) -> anyhow::Result<()> {
    let raw = state.agent.curate().await?;
    let report = Report::from_model_output(&raw)?;
    let html = render_report(&report);
    state.mailer.send(RECIPIENT, SUBJECT, &html).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Agent double returning a canned result.
    struct StubAgent {
        result: Result<String, String>,
    }

    #[async_trait]
    impl NewsAgent for StubAgent {
        async fn curate(&self) -> anyhow::Result<String> {
            match &self.result {
                Ok(output) => Ok(output.clone()),
                Err(message) => Err(anyhow::anyhow!("{}", message)),
            }
        }
    }

    /// Mail double recording every send.
    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<(String, String, String)>>,
    }

    #[async_trait]
    impl MailTransport for RecordingMailer {
        async fn send(&self, to: &str, subject: &str, html: &str) -> anyhow::Result<()> {
            self.sent.lock().unwrap().push((
                to.to_string(),
                subject.to_string(),
                html.to_string(),
            ));
            Ok(())
        }
    }

    const VALID_PAYLOAD: &str = r#"{
        "global_enterprise_tech": [{"title": "T", "link": "https://t.example"}],
        "world_politics": [{"title": "W", "link": "https://w.example"}],
        "indian_politics": [{"title": "I", "link": "https://i.example"}],
        "business_market": [{"title": "B", "link": "https://b.example"}],
        "generated_at": "2025-08-04"
    }"#;

    fn state_with(agent_result: Result<String, String>) -> (Arc<AppState>, Arc<RecordingMailer>) {
        let mailer = Arc::new(RecordingMailer::default());
        let state = Arc::new(AppState {
            agent: Arc::new(StubAgent {
                result: agent_result,
            }),
            mailer: mailer.clone(),
        });
        (state, mailer)
    }

    #[tokio::test]
    async fn valid_payload_sends_exactly_one_mail() {
        let (state, mailer) = state_with(Ok(VALID_PAYLOAD.to_string()));

        let Json(response) = send_news(State(state)).await;
        assert_eq!(response.status, "success");

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let (to, subject, html) = &sent[0];
        assert_eq!(to, RECIPIENT);
        assert_eq!(subject, SUBJECT);
        assert!(!html.is_empty());
        assert!(html.contains("https://t.example"));
    }

    #[tokio::test]
    async fn fenced_payload_also_succeeds() {
        let (state, mailer) = state_with(Ok(format!("```json\n{VALID_PAYLOAD}\n```")));

        let Json(response) = send_news(State(state)).await;
        assert_eq!(response.status, "success");
        assert_eq!(mailer.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn agent_failure_surfaces_its_message_and_skips_mail() {
        let (state, mailer) = state_with(Err("agent exploded".to_string()));

        let Json(response) = send_news(State(state)).await;
        assert_eq!(response.status, "error");
        assert_eq!(response.message, "agent exploded");
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unparsable_output_is_an_error_and_skips_mail() {
        let (state, mailer) = state_with(Ok("this is not json".to_string()));

        let Json(response) = send_news(State(state)).await;
        assert_eq!(response.status, "error");
        assert!(mailer.sent.lock().unwrap().is_empty());
    }
}
