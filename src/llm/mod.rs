//! LLM integration: chat-completion types and the OpenRouter client.
//!
//! Message content arrives in one of two wire shapes: a plain string, or a
//! list of typed blocks. Both are modeled by [`MessageContent`] and collapsed
//! to text exactly once, at this boundary — callers never probe shapes.

mod openrouter;

pub use openrouter::OpenRouterClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Chat participant role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// A single message in the conversation history sent to the model.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: Option<MessageContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

/// Message content: either a plain string or a list of typed blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

/// One element of a block-list content payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub text: String,
}

impl MessageContent {
    /// Collapse the content to plain text. Block lists concatenate their
    /// text blocks; non-text blocks are ignored.
    pub fn into_text(self) -> String {
        match self {
            MessageContent::Text(text) => text,
            MessageContent::Blocks(blocks) => blocks
                .into_iter()
                .filter(|b| b.kind.is_empty() || b.kind == "text")
                .map(|b| b.text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// A tool invocation requested by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    #[serde(rename = "type", default = "function_kind")]
    pub kind: String,
    pub function: FunctionCall,
}

/// The function half of a tool call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// JSON-encoded arguments exactly as produced by the model.
    pub arguments: String,
}

fn function_kind() -> String {
    "function".to_string()
}

/// The assistant's turn as returned by a chat-completion call.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Option<MessageContent>,
    #[serde(default)]
    pub tool_calls: Option<Vec<ToolCall>>,
}

/// Chat-completion provider, kept behind a trait so the agent can be driven
/// by a test double.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
        tools: Option<&[Value]>,
    ) -> anyhow::Result<AssistantMessage>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_content_collapses_to_itself() {
        let content: MessageContent = serde_json::from_value(json!("hello")).unwrap();
        assert_eq!(content.into_text(), "hello");
    }

    #[test]
    fn block_content_collapses_to_joined_text() {
        let content: MessageContent = serde_json::from_value(json!([
            {"type": "text", "text": "first"},
            {"type": "image", "text": ""},
            {"type": "text", "text": "second"},
        ]))
        .unwrap();
        assert_eq!(content.into_text(), "first\nsecond");
    }

    #[test]
    fn both_shapes_yield_the_same_text() {
        let plain: MessageContent = serde_json::from_value(json!("{\"ok\":true}")).unwrap();
        let blocks: MessageContent =
            serde_json::from_value(json!([{"type": "text", "text": "{\"ok\":true}"}])).unwrap();
        assert_eq!(plain.into_text(), blocks.into_text());
    }

    #[test]
    fn assistant_message_with_tool_calls_deserializes() {
        let message: AssistantMessage = serde_json::from_value(json!({
            "content": null,
            "tool_calls": [{
                "id": "call_1",
                "type": "function",
                "function": {"name": "search_web", "arguments": "{\"query\":\"x\"}"}
            }]
        }))
        .unwrap();
        let calls = message.tool_calls.unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].function.name, "search_web");
    }
}
