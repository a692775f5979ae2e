//! Curated-news tool: exposes the feed aggregator to the agent.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::Tool;
use crate::feeds::FeedAggregator;

/// Fetch the fixed category feeds and return the trimmed item lists.
pub struct FetchTopNews {
    aggregator: FeedAggregator,
}

impl FetchTopNews {
    pub fn new(aggregator: FeedAggregator) -> Self {
        Self { aggregator }
    }
}

#[async_trait]
impl Tool for FetchTopNews {
    fn name(&self) -> &str {
        "fetch_top_news"
    }

    fn description(&self) -> &str {
        "Returns curated news: 3 global enterprise tech, 3 world politics, 2 Indian politics, and 2 business/market items, each with title, summary, link, published date, and source feed."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _args: Value) -> anyhow::Result<String> {
        let news = self.aggregator.fetch_top_news().await;
        Ok(serde_json::to_string(&news)?)
    }
}
