//! Model configuration loading and validation.
//!
//! A loosely-structured [`Record`] is validated once, at the boundary, into an
//! [`AppConfig`] that the rest of the program can trust. Validation is
//! all-or-nothing: the first violated constraint fails the whole load.

mod app;
mod error;
mod model;
mod validation;

pub use app::AppConfig;
pub use error::{ConfigError, ValidationError, ValidationErrorKind};
pub use model::{DEFAULT_TEMPERATURE, ModelSettings};
pub use validation::Validator;

use serde_json::json;
use tracing::error;

/// Untyped configuration input, shaped like a parsed JSON document.
pub type Record = serde_json::Value;

/// Validate `raw` with the default (lax) validator.
pub fn load(raw: &Record) -> Result<AppConfig, ValidationError> {
    Validator::new().validate(raw)
}

/// Loads the application configuration.
///
/// There is no real environment or file source: `load_from_env` validates an
/// embedded record, and `load_from_str` accepts an in-memory YAML/JSON document
/// (the binary's `--inline=` argument).
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    validator: Validator,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validator(validator: Validator) -> Self {
        Self { validator }
    }

    pub fn is_strict(&self) -> bool {
        self.validator.is_strict()
    }

    /// Validate the embedded configuration record.
    ///
    /// A failure is logged here and returned to the caller unchanged.
    pub fn load_from_env(&self) -> Result<AppConfig, ConfigError> {
        self.validate(&mock_record()).map_err(|e| {
            error!(path = %e.path, kind = %e.kind, "Config validation failed: {}", e);
            ConfigError::from(e)
        })
    }

    /// Parse a YAML (or JSON) document and validate it.
    pub fn load_from_str(&self, src: &str) -> Result<AppConfig, ConfigError> {
        let raw: Record = serde_yaml::from_str(src)?;
        let config = self.validate(&raw)?;
        Ok(config)
    }

    fn validate(&self, raw: &Record) -> Result<AppConfig, ValidationError> {
        if self.validator.is_strict() {
            self.validator.validate(raw)
        } else {
            load(raw)
        }
    }
}

/// The embedded configuration record.
pub fn mock_record() -> Record {
    json!({
        "env": "production",
        "models": [
            {
                "name": "gpt-4-turbo",
                "temperature": 0.5,
                "stop_words": ["ERROR", "END"]
            },
            {
                // temperature and stop_words fall back to defaults
                "name": "llama-3-local"
            }
        ]
    })
}
