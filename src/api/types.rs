//! API request and response types.

use serde::{Deserialize, Serialize};

/// Request to run the agent.
#[derive(Debug, Clone, Deserialize)]
pub struct RunRequest {
    /// The user's question for the agent
    pub prompt: String,
}

/// Response from a completed agent run.
#[derive(Debug, Clone, Serialize)]
pub struct RunResponse {
    /// The prompt as submitted
    pub original_prompt: String,

    /// The agent's final answer
    pub final_answer: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

/// Error body for non-2xx responses.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error detail
    pub detail: String,
}
