//! System prompt templates for the agent.

use crate::tools::ToolRegistry;

/// Build the system prompt with tool definitions.
pub fn build_system_prompt(tools: &ToolRegistry) -> String {
    let tool_descriptions =
        serde_json::to_string_pretty(tools.specs()).expect("tool specs serialize to JSON");

    format!(
        r#"You are a helpful assistant with access to the following tools.
Your task is to answer the user's question.
You must decide if a tool is necessary to answer the question.

If a tool is needed, respond with a single JSON object with two keys:
"action": the name of the tool to use (e.g., "search")
"action_input": the query or input for the tool.

If no tool is needed, just respond with the answer directly.

Here are the available tools:
{tool_descriptions}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_every_tool() {
        let registry = ToolRegistry::default_tools();
        let prompt = build_system_prompt(&registry);

        assert!(prompt.contains("\"name\": \"search\""));
        assert!(prompt.contains("Searches for up-to-date information"));
        assert!(prompt.contains("\"action_input\""));
    }
}
