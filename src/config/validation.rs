//! Record-to-entity validation.
//!
//! Walks a [`Record`] field by field, applies defaults for absent fields and
//! stops at the first violation. Fields are checked in declaration order
//! (`env`, `models`, then per model `name`, `api_key`, `temperature`,
//! `stop_words`); with strict mode on, undeclared keys of an object are
//! reported after its declared fields.

use serde_json::{Map, Value};

use super::app::DEFAULT_ENV;
use super::model::DEFAULT_TEMPERATURE;
use super::{AppConfig, ModelSettings, Record, ValidationError};

const ROOT_PATH: &str = "$";
const APP_FIELDS: &[&str] = &["env", "models"];
const MODEL_FIELDS: &[&str] = &["name", "api_key", "temperature", "stop_words"];

/// Schema validator for [`AppConfig`] records.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    strict: bool,
}

impl Validator {
    /// Lax validator: unknown keys are ignored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator that also rejects keys the schema does not declare.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Validate `raw` into an [`AppConfig`]. Any violation fails the whole record.
    pub fn validate(&self, raw: &Record) -> Result<AppConfig, ValidationError> {
        let root = raw
            .as_object()
            .ok_or_else(|| ValidationError::wrong_type(ROOT_PATH, "mapping", raw))?;

        let env = match root.get("env") {
            None => DEFAULT_ENV.to_string(),
            Some(value) => expect_str("env", value)?.to_string(),
        };

        let models = match root.get("models") {
            None => return Err(ValidationError::missing("models", "sequence of models")),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(idx, item)| self.validate_model(idx, item))
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(ValidationError::wrong_type(
                    "models",
                    "sequence of models",
                    other,
                ));
            }
        };

        self.check_unknown(root, APP_FIELDS, "")?;

        Ok(AppConfig { env, models })
    }

    fn validate_model(&self, idx: usize, raw: &Value) -> Result<ModelSettings, ValidationError> {
        let path = format!("models[{idx}]");
        let fields = raw
            .as_object()
            .ok_or_else(|| ValidationError::wrong_type(path.clone(), "mapping", raw))?;

        let name_path = format!("{path}.name");
        let name = match fields.get("name") {
            None => return Err(ValidationError::missing(name_path, "non-empty string")),
            Some(value) => {
                let name = expect_str(&name_path, value)?;
                if name.is_empty() {
                    return Err(ValidationError::constraint(
                        name_path,
                        "non-empty string",
                        value,
                    ));
                }
                name.to_string()
            }
        };

        let api_key = match fields.get("api_key") {
            None | Some(Value::Null) => None,
            Some(Value::String(key)) => Some(key.clone()),
            Some(other) => {
                return Err(ValidationError::wrong_type(
                    format!("{path}.api_key"),
                    "string or null",
                    other,
                ));
            }
        };

        let temperature = match fields.get("temperature") {
            None => DEFAULT_TEMPERATURE,
            Some(value) => coerce_f64(&format!("{path}.temperature"), value)?,
        };

        let stop_words = match fields.get("stop_words") {
            None => Vec::new(),
            Some(value) => expect_str_list(&format!("{path}.stop_words"), value)?,
        };

        self.check_unknown(fields, MODEL_FIELDS, &path)?;

        Ok(ModelSettings {
            name,
            api_key,
            temperature,
            stop_words,
        })
    }

    fn check_unknown(
        &self,
        fields: &Map<String, Value>,
        known: &[&str],
        prefix: &str,
    ) -> Result<(), ValidationError> {
        if !self.strict {
            return Ok(());
        }

        match fields.iter().find(|(key, _)| !known.contains(&key.as_str())) {
            Some((key, value)) => Err(ValidationError::unknown_field(
                field_path(prefix, key),
                value,
            )),
            None => Ok(()),
        }
    }
}

fn field_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn expect_str<'a>(path: &str, value: &'a Value) -> Result<&'a str, ValidationError> {
    value
        .as_str()
        .ok_or_else(|| ValidationError::wrong_type(path, "string", value))
}

/// Accepts JSON numbers and numeric strings; booleans are not numbers.
fn coerce_f64(path: &str, value: &Value) -> Result<f64, ValidationError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::wrong_type(path, "float", value)),
    }
}

fn expect_str_list(path: &str, value: &Value) -> Result<Vec<String>, ValidationError> {
    let items = value
        .as_array()
        .ok_or_else(|| ValidationError::wrong_type(path, "sequence of strings", value))?;

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| expect_str(&format!("{path}[{idx}]"), item).map(str::to_string))
        .collect()
}
