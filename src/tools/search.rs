//! Simulated search tool.
//!
//! Stands in for a real search backend (Google, Bing, Tavily). Returns
//! canned results for a couple of known queries so the full two-step
//! agent flow can be exercised without external dependencies.

use async_trait::async_trait;
use tracing::info;

use super::Tool;

/// A search tool with hardcoded results.
pub struct SimulatedSearch;

#[async_trait]
impl Tool for SimulatedSearch {
    fn name(&self) -> &str {
        "search"
    }

    fn description(&self) -> &str {
        "Searches for up-to-date information on a given topic. Use this to answer questions about current events or specific facts."
    }

    async fn execute(&self, input: &str) -> anyhow::Result<String> {
        info!("Simulating search for query: '{}'", input);

        let query = input.to_lowercase();
        let result = if query.contains("latest trends in ai") {
            "Recent AI trends include the rise of multi-modal models like GPT-4o, \
             the development of smaller, more efficient open-source models (SLMs), \
             and a strong focus on AI agent architectures for autonomous task execution."
        } else if query.contains("who is the ceo of openai") {
            "Sam Altman is the CEO of OpenAI."
        } else {
            "Sorry, I couldn't find any information on that topic. Try asking about \
             'latest trends in AI' or 'who is the CEO of OpenAI'."
        };

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_query_returns_trends() {
        let output = SimulatedSearch
            .execute("Latest Trends in AI")
            .await
            .unwrap();
        assert!(output.contains("multi-modal models"));
    }

    #[tokio::test]
    async fn known_query_returns_ceo() {
        let output = SimulatedSearch
            .execute("who is the CEO of OpenAI?")
            .await
            .unwrap();
        assert_eq!(output, "Sam Altman is the CEO of OpenAI.");
    }

    #[tokio::test]
    async fn unknown_query_returns_fallback() {
        let output = SimulatedSearch.execute("weather in Paris").await.unwrap();
        assert!(output.starts_with("Sorry, I couldn't find any information"));
    }
}
