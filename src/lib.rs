//! # Tool Agent Service
//!
//! A minimal tool-use agent exposed over HTTP.
//!
//! This library provides:
//! - An HTTP API for submitting prompts and reading answers
//! - A two-step router/synthesizer agent with a tool registry
//! - Integration with any OpenAI-compatible chat-completions endpoint
//!
//! ## Architecture
//!
//! The agent follows a fixed two-step pattern, never a loop:
//! 1. Receive a prompt via the API
//! 2. Router call: the LLM decides between a direct answer and a tool call
//! 3. If a tool was requested, execute it once and feed the output back
//! 4. Synthesizer call: the LLM composes the final answer from the tool output
//!
//! ## Example
//!
//! ```rust,ignore
//! use tool_agent::{config::Config, agent::Agent, tools::ToolRegistry};
//!
//! let config = Config::from_env()?;
//! let agent = Agent::new(&config, ToolRegistry::default_tools());
//! let answer = agent.run("What are the latest trends in AI?").await;
//! ```

pub mod agent;
pub mod api;
pub mod config;
pub mod llm;
pub mod tools;

pub use config::Config;
