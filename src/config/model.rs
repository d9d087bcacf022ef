//! Per-model settings.

use std::fmt;

use serde::Serialize;

/// Default sampling temperature when a model entry does not set one.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Settings for a single model, as produced by validation.
///
/// The API key is kept in memory for clients that need it but is skipped by
/// serialization and redacted from `Debug`.
#[derive(Clone, PartialEq, Serialize)]
pub struct ModelSettings {
    pub(super) name: String,
    #[serde(skip)]
    pub(super) api_key: Option<String>,
    pub(super) temperature: f64,
    pub(super) stop_words: Vec<String>,
}

impl ModelSettings {
    /// Model identifier, e.g. "gpt-4-turbo".
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Sequences that stop generation, in configured order.
    pub fn stop_words(&self) -> &[String] {
        &self.stop_words
    }
}

impl fmt::Debug for ModelSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSettings")
            .field("name", &self.name)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("temperature", &self.temperature)
            .field("stop_words", &self.stop_words)
            .finish()
    }
}
