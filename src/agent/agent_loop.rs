//! Core router/synthesizer control flow.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::llm::{ChatMessage, LlmClient, LlmError, OpenAiClient};
use crate::tools::ToolRegistry;

use super::decision::RouterDecision;
use super::prompt::build_system_prompt;

/// Router call: deterministic tool selection.
const ROUTER_TEMPERATURE: f32 = 0.0;

/// Synthesizer call: more natural language.
const SYNTHESIZER_TEMPERATURE: f32 = 0.7;

/// Every way a run can terminate early. `Agent::run` renders these to the
/// caller as plain strings; they never cross the HTTP boundary as errors.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("An error occurred during the first API call: {0}")]
    RouterCall(#[source] LlmError),

    #[error("Error: The model's response was not a valid tool call JSON object.")]
    InvalidToolCall,

    #[error("Error: The model tried to use a tool named '{0}' which does not exist.")]
    UnknownTool(String),

    #[error("An error occurred while executing the tool '{name}': {source}")]
    ToolExecution {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("An error occurred during the final API call: {0}")]
    SynthesizerCall(#[source] LlmError),
}

/// The two-step tool-use agent.
pub struct Agent {
    llm: Arc<dyn LlmClient>,
    tools: ToolRegistry,
    model: String,
    system_prompt: String,
}

impl Agent {
    /// Create an agent backed by the configured chat-completions provider.
    pub fn new(config: &Config, tools: ToolRegistry) -> Self {
        let llm = Arc::new(OpenAiClient::new(
            config.api_key.clone(),
            config.base_url.clone(),
            config.request_timeout,
        ));
        Self::with_client(llm, tools, config.default_model.clone())
    }

    /// Create an agent with an injected client (used by tests).
    pub fn with_client(llm: Arc<dyn LlmClient>, tools: ToolRegistry, model: String) -> Self {
        let system_prompt = build_system_prompt(&tools);
        Self {
            llm,
            tools,
            model,
            system_prompt,
        }
    }

    /// Run the agent for one prompt and return the final answer.
    ///
    /// Never fails: every failure mode collapses to a descriptive string so
    /// the caller always gets an answer-shaped result.
    pub async fn run(&self, user_prompt: &str) -> String {
        match self.run_inner(user_prompt).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("Agent run terminated on error path: {}", e);
                e.to_string()
            }
        }
    }

    async fn run_inner(&self, user_prompt: &str) -> Result<String, AgentError> {
        // Conversation state lives and dies with this call.
        let mut messages = vec![
            ChatMessage::system(self.system_prompt.clone()),
            ChatMessage::user(user_prompt),
        ];

        debug!("Router call");
        let response = self
            .llm
            .chat_completion(&self.model, &messages, ROUTER_TEMPERATURE)
            .await
            .map_err(AgentError::RouterCall)?;
        let response = response.trim().to_string();
        messages.push(ChatMessage::assistant(response.clone()));

        let (action, action_input) = match RouterDecision::parse(&response) {
            Ok(RouterDecision::Direct(text)) => {
                debug!("No tool call detected. Returning direct answer.");
                return Ok(text);
            }
            Ok(RouterDecision::ToolCall {
                action,
                action_input,
            }) => (action, action_input),
            Err(_) => return Err(AgentError::InvalidToolCall),
        };

        debug!("Tool call detected: {} ({})", action, action_input);
        let tool = self
            .tools
            .get(&action)
            .ok_or_else(|| AgentError::UnknownTool(action.clone()))?;

        let tool_output = tool
            .execute(&action_input)
            .await
            .map_err(|source| AgentError::ToolExecution {
                name: action.clone(),
                source,
            })?;

        messages.push(ChatMessage::user(format!(
            "The tool '{}' returned the following result:\n{}",
            action, tool_output
        )));

        debug!("Synthesizer call");
        self.llm
            .chat_completion(&self.model, &messages, SYNTHESIZER_TEMPERATURE)
            .await
            .map_err(AgentError::SynthesizerCall)
    }
}
