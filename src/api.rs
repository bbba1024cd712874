use std::sync::Arc;

use anyhow::{Error, Result, anyhow};
use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::{
    clients::{discord::DiscordClient, faceit::FaceitClient},
    config::Config,
    models::{event::InboundEvent, notification::MatchSummary},
    utils::log_raw_event,
};

const SECURITY_HEADER_NAME: &str = "X-Security";

pub struct AppState {
    config: Config,
    faceit_client: FaceitClient,
    discord_client: DiscordClient,
}

#[derive(Debug, Deserialize)]
pub struct AuthQuery {
    #[serde(default)]
    auth: Option<String>,
}

pub fn build_router(config: Config) -> Router {
    let state = Arc::new(AppState {
        faceit_client: FaceitClient::new(&config),
        discord_client: DiscordClient::new(&config),
        config,
    });

    Router::new()
        .route("/faceit-webhook", post(faceit_webhook))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_api_server(config: Config) -> Result<(), Error> {
    let addr = format!("0.0.0.0:{}", config.server_port);
    let app = build_router(config);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Webhook relay server started");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

async fn faceit_webhook(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AuthQuery>,
    headers: HeaderMap,
    Json(raw_event): Json<serde_json::Value>,
) -> (StatusCode, &'static str) {
    info!(event = %raw_event, "Received event");

    if let Err(e) = log_raw_event(&state.config.event_log_dir, &raw_event).await {
        warn!(error = %e, "Failed to write raw event log");
    }

    let event = match serde_json::from_value::<InboundEvent>(raw_event) {
        Ok(event) => event,
        Err(e) => {
            warn!(error = %e, "Event body is not a webhook event object");
            return (StatusCode::BAD_REQUEST, "Event payload is missing match ID");
        }
    };

    let Some(match_id) = event.match_id().map(str::to_string) else {
        warn!(event = %event.event, "Received event with missing match ID");
        return (StatusCode::BAD_REQUEST, "Event payload is missing match ID");
    };

    match process_event(&state, &event, &match_id, &headers, query.auth.as_deref()).await {
        Ok(()) => (StatusCode::OK, "Event received and processed"),
        Err(e) => {
            error!(
                match_id = %match_id,
                error = %e,
                "Error processing event or sending message to Discord"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, "Error processing event")
        }
    }
}

/// The linear pipeline for one match event: authenticate, enrich, project,
/// deliver. Every failure is terminal for this request.
async fn process_event(
    state: &AppState,
    event: &InboundEvent,
    match_id: &str,
    headers: &HeaderMap,
    auth_query: Option<&str>,
) -> Result<(), Error> {
    verify_request_auth(&state.config, headers, auth_query)?;

    let detail = state.faceit_client.fetch_match(match_id).await?;

    let summary = MatchSummary::new(event, &detail);
    let message = summary.to_discord_message(match_id, &event.timestamp);

    state.discord_client.send_message(&message).await?;

    Ok(())
}

/// Both the `X-Security` header and the `auth` query value must match the
/// configured secrets exactly. A mismatch surfaces through the generic 500
/// path, matching the endpoint's original contract, rather than 401/403.
fn verify_request_auth(
    config: &Config,
    headers: &HeaderMap,
    auth_query: Option<&str>,
) -> Result<(), Error> {
    let header_value = headers
        .get(SECURITY_HEADER_NAME)
        .and_then(|value| value.to_str().ok());

    if header_value != Some(config.security_header_value.as_str())
        || auth_query != Some(config.security_query_value.as_str())
    {
        return Err(anyhow!("Unauthorized request"));
    }

    Ok(())
}
