//! Tool implementations exposed to the curation agent.
//!
//! Two capabilities are declared: `fetch_top_news` (the feed aggregator) and
//! `search_web` (Google Custom Search). The registry owns the tool instances,
//! produces their schemas for the chat-completion call, and dispatches
//! execution by name.

mod news;
mod search;

pub use news::FetchTopNews;
pub use search::SearchWeb;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::Config;
use crate::feeds::FeedAggregator;

/// A capability the agent can invoke during its reasoning loop.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name as declared to the model.
    fn name(&self) -> &str;

    /// Tool description as declared to the model.
    fn description(&self) -> &str;

    /// JSON Schema for the tool's arguments.
    fn parameters_schema(&self) -> Value;

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: Value) -> anyhow::Result<String>;
}

/// Registry of the declared tools.
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let aggregator = FeedAggregator::new(FeedAggregator::http_client()?);
        let tools: Vec<Box<dyn Tool>> = vec![
            Box::new(FetchTopNews::new(aggregator)),
            Box::new(SearchWeb::new(config.search.clone())),
        ];
        Ok(Self { tools })
    }

    /// Build a registry from explicit tool instances (useful for testing).
    pub fn with_tools(tools: Vec<Box<dyn Tool>>) -> Self {
        Self { tools }
    }

    /// Tool definitions in the chat-completions `tools` format.
    pub fn get_tool_schemas(&self) -> Vec<Value> {
        self.tools
            .iter()
            .map(|t| {
                json!({
                    "type": "function",
                    "function": {
                        "name": t.name(),
                        "description": t.description(),
                        "parameters": t.parameters_schema(),
                    }
                })
            })
            .collect()
    }

    /// Execute a tool by name.
    pub async fn execute(&self, name: &str, args: Value) -> anyhow::Result<String> {
        match self.tools.iter().find(|t| t.name() == name) {
            Some(tool) => tool.execute(args).await,
            None => Err(anyhow::anyhow!("Unknown tool: {}", name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn registry() -> ToolRegistry {
        ToolRegistry::new(&Config::new("key".to_string(), "model".to_string())).unwrap()
    }

    #[test]
    fn schemas_declare_both_tools() {
        let schemas = registry().get_tool_schemas();
        let names: Vec<&str> = schemas
            .iter()
            .map(|s| s["function"]["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["fetch_top_news", "search_web"]);
        assert!(schemas.iter().all(|s| s["type"] == "function"));
    }

    #[tokio::test]
    async fn unknown_tool_is_an_error() {
        let err = registry()
            .execute("rm_rf", serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Unknown tool"));
    }
}
