//! Model generation profile.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_TEMPERATURE, ModelSettings};

/// Token budget when none is given.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Temperature above which a profile counts as creative.
const CREATIVE_THRESHOLD: f64 = 0.8;

/// Generation parameters for one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelProfile {
    pub model_name: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

impl ModelProfile {
    /// Creates a profile with default temperature and token budget.
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn is_creative(&self) -> bool {
        self.temperature > CREATIVE_THRESHOLD
    }
}

impl From<&ModelSettings> for ModelProfile {
    fn from(settings: &ModelSettings) -> Self {
        Self::new(settings.name()).with_temperature(settings.temperature())
    }
}
