//! HTTP request handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::agent::Agent;

use super::types::{ErrorResponse, HealthResponse, RunRequest, RunResponse};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<Agent>,
}

/// `GET /health` - liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /run` - execute the agent for one prompt.
pub async fn run_agent(
    State(state): State<AppState>,
    Json(request): Json<RunRequest>,
) -> Result<Json<RunResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.prompt.trim().is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                detail: "prompt must not be empty".to_string(),
            }),
        ));
    }

    info!(
        "Received request for prompt: '{}...'",
        truncate_for_log(&request.prompt, 50)
    );

    // Agent failures come back as answer strings, never as errors.
    let final_answer = state.agent.run(&request.prompt).await;

    info!("Successfully completed agent run.");
    Ok(Json(RunResponse {
        original_prompt: request.prompt,
        final_answer,
    }))
}

/// Truncate a string for logging purposes.
fn truncate_for_log(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        s.chars().take(max_chars).collect()
    }
}
