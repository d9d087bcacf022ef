use async_trait::async_trait;
use tracing::debug;

use super::LlmClient;
use crate::config::ModelSettings;

/// Hosted OpenAI-style client.
#[derive(Debug, Clone, Default)]
pub struct OpenAiClient {
    model: Option<String>,
    has_api_key: bool,
}

impl OpenAiClient {
    pub fn from_settings(settings: &ModelSettings) -> Self {
        Self {
            model: Some(settings.name().to_string()),
            has_api_key: settings.api_key().is_some(),
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn generate(&self, prompt: &str) -> String {
        debug!(model = ?self.model, has_api_key = self.has_api_key, "OpenAI generate");
        format!("OpenAI response to: {}", prompt)
    }

    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }
}
