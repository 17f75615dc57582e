//! JSON Schema validation for model types
//!
//! Validated models are checked against a compiled schema when they are
//! constructed. The validation mode controls how strictly the schema is
//! enforced.

use crate::error::{BenchError, BenchResult};
use jsonschema::{validator_for, Validator};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Validation mode for schema enforcement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaValidationMode {
    /// No validation
    Off,
    /// Reject any document that doesn't match the schema
    #[default]
    Strict,
    /// Accept the document but log warnings for violations
    Lenient,
}

impl FromStr for SchemaValidationMode {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(BenchError::InvalidConfig(format!(
                "unknown validation mode '{}' (expected strict, lenient or off)",
                other
            ))),
        }
    }
}

impl fmt::Display for SchemaValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Off => "off",
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        };
        f.write_str(s)
    }
}

/// Compiled schema for one model type
pub struct ModelSchema {
    name: String,
    mode: SchemaValidationMode,
    validator: Option<Validator>,
}

impl ModelSchema {
    /// Compile `schema` unless validation is turned off
    pub fn new(
        name: impl Into<String>,
        schema: Value,
        mode: SchemaValidationMode,
    ) -> BenchResult<Self> {
        let validator = if mode == SchemaValidationMode::Off {
            None
        } else {
            Some(
                validator_for(&schema)
                    .map_err(|e| BenchError::SchemaCompilation(e.to_string()))?,
            )
        };

        Ok(Self {
            name: name.into(),
            mode,
            validator,
        })
    }

    /// Validate a document against the schema
    pub fn validate(&self, document: &Value) -> Result<(), SchemaValidationError> {
        let Some(ref validator) = self.validator else {
            return Ok(());
        };

        match self.mode {
            SchemaValidationMode::Off => Ok(()),
            SchemaValidationMode::Strict => {
                let violations: Vec<ValidationViolation> = validator
                    .iter_errors(document)
                    .map(|e| ValidationViolation {
                        instance_path: e.instance_path().to_string(),
                        schema_path: e.schema_path().to_string(),
                        error: e.to_string(),
                    })
                    .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(SchemaValidationError::SchemaViolations {
                        model: self.name.clone(),
                        violations,
                    })
                }
            }
            SchemaValidationMode::Lenient => {
                for error in validator.iter_errors(document) {
                    tracing::warn!(
                        schema = %self.name,
                        path = %error.instance_path(),
                        violation = %error,
                        "Schema validation warning (lenient mode)"
                    );
                }
                Ok(())
            }
        }
    }

    pub fn mode(&self) -> SchemaValidationMode {
        self.mode
    }
}

impl fmt::Debug for ModelSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSchema")
            .field("name", &self.name)
            .field("mode", &self.mode)
            .field("compiled", &self.validator.is_some())
            .finish()
    }
}

/// Raised when a document doesn't match its schema
#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("{model}: {} violation(s): {}", .violations.len(), summarize(.violations))]
    SchemaViolations {
        model: String,
        violations: Vec<ValidationViolation>,
    },
}

impl SchemaValidationError {
    pub fn violations(&self) -> &[ValidationViolation] {
        match self {
            Self::SchemaViolations { violations, .. } => violations,
        }
    }
}

impl From<SchemaValidationError> for BenchError {
    fn from(err: SchemaValidationError) -> Self {
        BenchError::SchemaValidation(err.to_string())
    }
}

/// Individual schema violation detail
#[derive(Debug, Clone)]
pub struct ValidationViolation {
    /// JSON Pointer to the violating instance
    pub instance_path: String,
    /// JSON Pointer to the schema keyword that failed
    pub schema_path: String,
    /// Human-readable error message
    pub error: String,
}

fn summarize(violations: &[ValidationViolation]) -> String {
    violations
        .iter()
        .map(|v| {
            if v.instance_path.is_empty() {
                v.error.clone()
            } else {
                format!("{}: {}", v.instance_path, v.error)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}
