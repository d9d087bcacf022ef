//! LLM client abstraction.
//!
//! Callers depend on [`LlmClient`] only; the concrete clients are unrelated
//! types that happen to implement it. Responses are canned, no requests leave
//! the process.

mod local;
mod openai;

pub use local::LocalLlamaClient;
pub use openai::OpenAiClient;

use async_trait::async_trait;
use tracing::info;

use crate::config::ModelSettings;

/// Model-name prefix routed to [`OpenAiClient`].
const OPENAI_MODEL_PREFIX: &str = "gpt-";

/// Text generation backend.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate a completion for `prompt`.
    async fn generate(&self, prompt: &str) -> String;

    /// Short backend identifier used in logs.
    fn name(&self) -> &str;

    /// Configured model this client serves, if any.
    fn model(&self) -> Option<&str>;
}

/// Pick a client for a configured model.
pub fn client_for(model: &ModelSettings) -> Box<dyn LlmClient> {
    if model.name().starts_with(OPENAI_MODEL_PREFIX) {
        Box::new(OpenAiClient::from_settings(model))
    } else {
        Box::new(LocalLlamaClient::from_settings(model))
    }
}

/// Run one prompt through `client` and return the reply.
pub async fn run_agent(client: &dyn LlmClient, prompt: &str) -> String {
    let reply = client.generate(prompt).await;
    info!(client = client.name(), model = ?client.model(), reply = %reply, "Agent reply");
    reply
}

#[cfg(test)]
mod tests;
