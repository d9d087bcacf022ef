use async_trait::async_trait;
use tracing::debug;

use super::LlmClient;
use crate::config::ModelSettings;

/// Locally hosted Llama client.
#[derive(Debug, Clone, Default)]
pub struct LocalLlamaClient {
    model: Option<String>,
    stop_words: Vec<String>,
}

impl LocalLlamaClient {
    pub fn from_settings(settings: &ModelSettings) -> Self {
        Self {
            model: Some(settings.name().to_string()),
            stop_words: settings.stop_words().to_vec(),
        }
    }
}

#[async_trait]
impl LlmClient for LocalLlamaClient {
    async fn generate(&self, prompt: &str) -> String {
        debug!(model = ?self.model, stop_words = ?self.stop_words, "Local Llama generate");
        format!("Local Llama response to: {}", prompt)
    }

    fn name(&self) -> &str {
        "local-llama"
    }

    fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }
}
