//! Tool definitions and registry.
//!
//! Every tool is a string-in, string-out capability with a name and a
//! description the model can read. The registry is built once and never
//! mutated afterwards, so it can be shared freely across requests.

mod search;

pub use search::SimulatedSearch;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

/// A capability the agent can invoke.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name the model selects with its `action` field.
    fn name(&self) -> &str;

    /// Human/model-readable description, embedded into the system prompt.
    fn description(&self) -> &str;

    /// Run the tool against the model-supplied `action_input`.
    async fn execute(&self, input: &str) -> anyhow::Result<String>;
}

/// The prompt-facing view of a tool: name and description only.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
}

/// Immutable name-to-tool lookup table.
///
/// Tool names must be unique; if the caller supplies duplicates, the last
/// one wins. This is a construction invariant, not a runtime check.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    specs: Vec<ToolSpec>,
}

impl ToolRegistry {
    /// Build a registry from a list of tools. Description order follows list order.
    pub fn new(tools: Vec<Arc<dyn Tool>>) -> Self {
        let specs = tools
            .iter()
            .map(|tool| ToolSpec {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
            })
            .collect();

        let tools = tools
            .into_iter()
            .map(|tool| (tool.name().to_string(), tool))
            .collect();

        Self { tools, specs }
    }

    /// The default tool set the service ships with.
    pub fn default_tools() -> Self {
        Self::new(vec![Arc::new(SimulatedSearch) as Arc<dyn Tool>])
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Flattened descriptions for prompt embedding.
    pub fn specs(&self) -> &[ToolSpec] {
        &self.specs
    }
}
