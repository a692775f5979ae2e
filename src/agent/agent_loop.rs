//! Core curation loop implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::llm::{ChatMessage, LlmClient, MessageContent, OpenRouterClient, Role, ToolCall};
use crate::tools::ToolRegistry;

use super::prompt::build_system_prompt;
use super::NewsAgent;

/// The curation agent: an LLM with the news and search tools.
pub struct Agent {
    llm: Arc<dyn LlmClient>,
    tools: ToolRegistry,
    model: String,
    max_iterations: usize,
}

impl Agent {
    /// Create an agent wired to OpenRouter and the real tools.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            llm: Arc::new(OpenRouterClient::new(config.api_key.clone())),
            tools: ToolRegistry::new(config)?,
            model: config.model.clone(),
            max_iterations: config.max_iterations,
        })
    }

    /// Create an agent from explicit parts (useful for testing).
    pub fn with_parts(
        llm: Arc<dyn LlmClient>,
        tools: ToolRegistry,
        model: String,
        max_iterations: usize,
    ) -> Self {
        Self {
            llm,
            tools,
            model,
            max_iterations,
        }
    }

    /// Execute a single tool call. A failing tool aborts the run; the error
    /// surfaces at the HTTP boundary.
    async fn execute_tool_call(&self, tool_call: &ToolCall) -> anyhow::Result<String> {
        let args: serde_json::Value =
            serde_json::from_str(&tool_call.function.arguments).unwrap_or(serde_json::Value::Null);

        self.tools.execute(&tool_call.function.name, args).await
    }
}

#[async_trait]
impl NewsAgent for Agent {
    async fn curate(&self) -> anyhow::Result<String> {
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        let mut messages = vec![
            ChatMessage {
                role: Role::System,
                content: Some(MessageContent::Text(build_system_prompt(&today))),
                tool_calls: None,
                tool_call_id: None,
            },
            ChatMessage {
                role: Role::User,
                content: Some(MessageContent::Text("Today's News!!!".to_string())),
                tool_calls: None,
                tool_call_id: None,
            },
        ];

        let tool_schemas = self.tools.get_tool_schemas();

        for iteration in 0..self.max_iterations {
            tracing::debug!("Agent iteration {}", iteration + 1);

            let response = self
                .llm
                .chat_completion(&self.model, &messages, Some(&tool_schemas))
                .await?;

            if let Some(tool_calls) = &response.tool_calls {
                if !tool_calls.is_empty() {
                    messages.push(ChatMessage {
                        role: Role::Assistant,
                        content: response.content.clone(),
                        tool_calls: Some(tool_calls.clone()),
                        tool_call_id: None,
                    });

                    for tool_call in tool_calls {
                        tracing::debug!(
                            tool = %tool_call.function.name,
                            "executing tool call"
                        );

                        let result = self.execute_tool_call(tool_call).await?;

                        messages.push(ChatMessage {
                            role: Role::Tool,
                            content: Some(MessageContent::Text(result)),
                            tool_calls: None,
                            tool_call_id: Some(tool_call.id.clone()),
                        });
                    }

                    continue;
                }
            }

            // No tool calls - this is the final report.
            if let Some(content) = response.content {
                return Ok(content.into_text());
            }

            return Err(anyhow::anyhow!("LLM returned empty response"));
        }

        Err(anyhow::anyhow!(
            "Max iterations ({}) reached without a final report",
            self.max_iterations
        ))
    }
}
