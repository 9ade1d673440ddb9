//! Agent module - the two-step router/synthesizer control flow.
//!
//! Unlike a "tools in a loop" agent, this one makes at most two LLM calls:
//! 1. Router call: decide between a direct answer and a single tool call
//! 2. If a tool was requested, execute it once
//! 3. Synthesizer call: compose the final answer from the tool output

mod agent_loop;
mod decision;
mod prompt;

pub use agent_loop::{Agent, AgentError};
pub use decision::RouterDecision;
pub use prompt::build_system_prompt;
