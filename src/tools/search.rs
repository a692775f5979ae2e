//! Web search tool backed by Google Custom Search.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::Tool;
use crate::config::SearchConfig;

const SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Search the web through the Google Custom Search JSON API.
pub struct SearchWeb {
    client: reqwest::Client,
    config: SearchConfig,
}

impl SearchWeb {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Tool for SearchWeb {
    fn name(&self) -> &str {
        "search_web"
    }

    fn description(&self) -> &str {
        "Perform a web search and return ranked results as JSON. Use to gather additional context and recent developments for a news item."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                },
                "num": {
                    "type": "integer",
                    "description": "Number of results to return, 1-10 (default: 5)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let query = args["query"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Missing 'query' argument"))?;
        let num = args["num"].as_u64().unwrap_or(5).to_string();

        let response = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("q", query),
                ("key", self.config.api_key.as_str()),
                ("cx", self.config.cse_id.as_str()),
                ("num", num.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let data: Value = response.json().await?;
        let items = data.get("items").cloned().unwrap_or_else(|| json!([]));
        Ok(items.to_string())
    }
}
