//! Router response parsing.
//!
//! The router call's contract with the model: reply with a JSON object
//! `{"action": ..., "action_input": ...}` to request a tool, or with plain
//! text to answer directly. Anything that does not parse as JSON is a
//! direct answer by definition.

use serde_json::Value;
use thiserror::Error;

/// Valid JSON that is not a well-formed tool call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The model's response was not a valid tool call JSON object.")]
pub struct InvalidToolCall;

/// What the router decided to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterDecision {
    /// The model answered directly; the text is the final answer.
    Direct(String),

    /// The model requested a tool invocation.
    ToolCall {
        action: String,
        action_input: String,
    },
}

impl RouterDecision {
    /// Classify the router's raw response text.
    ///
    /// - Not valid JSON: `Direct` with the trimmed text verbatim.
    /// - JSON object with string `action` and `action_input`: `ToolCall`.
    /// - Any other JSON (missing keys, wrong types, non-object): error.
    pub fn parse(raw: &str) -> Result<Self, InvalidToolCall> {
        let trimmed = raw.trim();

        let value: Value = match serde_json::from_str(trimmed) {
            Ok(value) => value,
            Err(_) => return Ok(Self::Direct(trimmed.to_string())),
        };

        let action = value.get("action").and_then(Value::as_str);
        let action_input = value.get("action_input").and_then(Value::as_str);

        match (action, action_input) {
            (Some(action), Some(action_input)) => Ok(Self::ToolCall {
                action: action.to_string(),
                action_input: action_input.to_string(),
            }),
            _ => Err(InvalidToolCall),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_direct_answer() {
        let decision = RouterDecision::parse("Paris is the capital of France.").unwrap();
        assert_eq!(
            decision,
            RouterDecision::Direct("Paris is the capital of France.".to_string())
        );
    }

    #[test]
    fn direct_answer_is_trimmed() {
        let decision = RouterDecision::parse("  an answer \n").unwrap();
        assert_eq!(decision, RouterDecision::Direct("an answer".to_string()));
    }

    #[test]
    fn well_formed_object_is_tool_call() {
        let raw = r#"{"action": "search", "action_input": "latest trends in AI"}"#;
        let decision = RouterDecision::parse(raw).unwrap();
        assert_eq!(
            decision,
            RouterDecision::ToolCall {
                action: "search".to_string(),
                action_input: "latest trends in AI".to_string(),
            }
        );
    }

    #[test]
    fn missing_action_input_is_invalid() {
        let raw = r#"{"action": "search"}"#;
        assert_eq!(RouterDecision::parse(raw), Err(InvalidToolCall));
    }

    #[test]
    fn missing_action_is_invalid() {
        let raw = r#"{"action_input": "latest trends in AI"}"#;
        assert_eq!(RouterDecision::parse(raw), Err(InvalidToolCall));
    }

    #[test]
    fn non_object_json_is_invalid() {
        assert_eq!(RouterDecision::parse("42"), Err(InvalidToolCall));
        assert_eq!(RouterDecision::parse("[1, 2]"), Err(InvalidToolCall));
    }

    #[test]
    fn non_string_values_are_invalid() {
        let raw = r#"{"action": "search", "action_input": {"query": "x"}}"#;
        assert_eq!(RouterDecision::parse(raw), Err(InvalidToolCall));
    }
}
