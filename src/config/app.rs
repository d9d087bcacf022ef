//! Root application configuration.

use serde::Serialize;

use super::ModelSettings;

/// Environment name used when the record does not set one.
pub const DEFAULT_ENV: &str = "dev";

/// Validated application configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppConfig {
    pub(super) env: String,
    pub(super) models: Vec<ModelSettings>,
}

impl AppConfig {
    /// Environment: "dev", "production", ...
    pub fn env(&self) -> &str {
        &self.env
    }

    /// Configured models in record order.
    pub fn models(&self) -> &[ModelSettings] {
        &self.models
    }

    /// Export as a record. API keys are never included.
    pub fn to_record(&self) -> serde_json::Value {
        // Strings, floats and sequences only; serializing into a Value can't fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_record())
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
