//! Configuration error types.

use std::fmt;

use thiserror::Error;

/// What went wrong at a given field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required field is absent.
    Missing,
    /// The field is present but has the wrong type.
    WrongType,
    /// The type is right but the value breaks a constraint (e.g. empty name).
    Constraint,
    /// Strict mode only: a key the schema does not declare.
    UnknownField,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorKind::Missing => write!(f, "missing"),
            ValidationErrorKind::WrongType => write!(f, "wrong type"),
            ValidationErrorKind::Constraint => write!(f, "constraint violated"),
            ValidationErrorKind::UnknownField => write!(f, "unknown field"),
        }
    }
}

/// A record failed the field constraints of the entity it was validated into.
///
/// `actual` holds the offending value rendered as compact JSON, or `None`
/// when the field was absent.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{path}: expected {expected}, got {}", .actual.as_deref().unwrap_or("missing"))]
pub struct ValidationError {
    pub path: String,
    pub kind: ValidationErrorKind,
    pub expected: String,
    pub actual: Option<String>,
}

impl ValidationError {
    pub fn missing(path: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: ValidationErrorKind::Missing,
            expected: expected.into(),
            actual: None,
        }
    }

    pub fn wrong_type(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: &serde_json::Value,
    ) -> Self {
        Self {
            path: path.into(),
            kind: ValidationErrorKind::WrongType,
            expected: expected.into(),
            actual: Some(actual.to_string()),
        }
    }

    pub fn constraint(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: &serde_json::Value,
    ) -> Self {
        Self {
            path: path.into(),
            kind: ValidationErrorKind::Constraint,
            expected: expected.into(),
            actual: Some(actual.to_string()),
        }
    }

    pub fn unknown_field(path: impl Into<String>, actual: &serde_json::Value) -> Self {
        Self {
            path: path.into(),
            kind: ValidationErrorKind::UnknownField,
            expected: "no such field".into(),
            actual: Some(actual.to_string()),
        }
    }
}

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
