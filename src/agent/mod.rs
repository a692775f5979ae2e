//! Agent module - the news curation loop.
//!
//! The agent follows a "tools in a loop" pattern:
//! 1. Build context with the curator system prompt
//! 2. Call LLM with the declared tools
//! 3. If the LLM requests tool calls, execute them and feed results back
//! 4. Repeat until the LLM produces the final JSON report or the iteration
//!    cap is reached

mod agent_loop;
mod prompt;

pub use agent_loop::Agent;
pub use prompt::build_system_prompt;

use async_trait::async_trait;

/// News curation agent, kept behind a trait so the HTTP layer can be wired
/// to a test double.
#[async_trait]
pub trait NewsAgent: Send + Sync {
    /// Run the curation loop and return the model's final text output.
    async fn curate(&self) -> anyhow::Result<String>;
}
