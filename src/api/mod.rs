//! HTTP API for the Tool Agent Service.
//!
//! Routes:
//! - `GET /health` - liveness check
//! - `POST /run` - run the agent for one prompt

pub mod routes;
pub mod types;

use std::any::Any;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::agent::Agent;
use crate::config::Config;
use crate::tools::ToolRegistry;

use routes::AppState;
use types::ErrorResponse;

/// Assemble the router with all routes and middleware.
pub fn build_router(agent: Arc<Agent>) -> Router {
    let state = AppState { agent };

    Router::new()
        .route("/health", get(routes::health))
        .route("/run", post(routes::run_agent))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Convert a handler panic into the generic internal-error response.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            detail: format!("An internal error occurred: {}", detail),
        }),
    )
        .into_response()
}

/// Start the HTTP server and serve until shutdown.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let agent = Arc::new(Agent::new(&config, ToolRegistry::default_tools()));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, build_router(agent)).await?;

    Ok(())
}
