//! Error types for vetted-config.
//!
//! There are two tiers. [`SchemaError`] is the faulting tier: malformed
//! schemas and unloadable sources are programmer/environment errors,
//! surfaced immediately through `Result`. [`ValidationError`] is the data
//! tier: a violation found in raw configuration is *recorded*, never
//! raised, so one validation run always reports the complete set of
//! problems.

use crate::core::KeyPath;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Result type alias for fallible vetted-config operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors that fault immediately instead of being collected.
///
/// These never describe problems in the raw configuration data itself;
/// data problems are reported as [`ValidationError`] records.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A named dict schema declared the same field twice.
    #[error("Duplicate field '{name}' in named dict schema")]
    DuplicateField {
        /// The field name that was declared more than once
        name: String,
    },

    /// A named dict schema declared a field with an empty name.
    #[error("Named dict schema fields must have non-empty names")]
    EmptyFieldName,

    #[cfg(feature = "load")]
    /// Failed to load configuration from a source.
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[cfg(feature = "load")]
    /// Failed to parse configuration from a source.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// The closed set of violation kinds a validation run can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// The raw value's runtime type does not match the declared type.
    WrongType,
    /// A required field was absent from a dictionary value.
    MissingRequiredKey,
    /// A raw key was not declared in the schema and unknown keys are not
    /// tolerated at that position.
    UnknownKey,
    /// An attached validator rejected the value.
    InvalidValue,
    /// A context-aware validator reported that the validation context it
    /// depends on could not be derived. Never injected by the engine
    /// itself.
    ContextUnavailable,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::WrongType => "wrong type",
            Self::MissingRequiredKey => "missing required key",
            Self::UnknownKey => "unknown key",
            Self::InvalidValue => "invalid value",
            Self::ContextUnavailable => "context unavailable",
        };
        write!(f, "{}", label)
    }
}

/// One violation found during a validation run.
///
/// Records are immutable once created and ordered by traversal order
/// (pre-order, fields and indices in declared/encountered order), so two
/// runs over identical inputs produce identical error lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    kind: ErrorKind,
    key_path: KeyPath,
    message: String,
    culprit: Value,
}

impl ValidationError {
    pub(crate) fn new(kind: ErrorKind, key_path: KeyPath, message: String, culprit: Value) -> Self {
        Self {
            kind,
            key_path,
            message,
            culprit,
        }
    }

    /// The kind of violation.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The exact position of the offending value in the raw data tree.
    ///
    /// For a missing required key, the path addresses the position the
    /// value was expected to occupy.
    pub fn key_path(&self) -> &KeyPath {
        &self.key_path
    }

    /// Human-readable description of the violation.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The offending raw value. `Value::Null` for missing-key errors,
    /// where there is no value to report.
    pub fn culprit(&self) -> &Value {
        &self.culprit
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key_path, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path_and_message() {
        let err = ValidationError::new(
            ErrorKind::InvalidValue,
            KeyPath::root().with_field("port"),
            "must be >= 1024".to_string(),
            serde_json::json!(80),
        );
        assert_eq!(err.to_string(), "port: must be >= 1024");
    }

    #[test]
    fn test_kind_display_labels() {
        assert_eq!(ErrorKind::WrongType.to_string(), "wrong type");
        assert_eq!(ErrorKind::MissingRequiredKey.to_string(), "missing required key");
        assert_eq!(ErrorKind::UnknownKey.to_string(), "unknown key");
        assert_eq!(ErrorKind::InvalidValue.to_string(), "invalid value");
        assert_eq!(ErrorKind::ContextUnavailable.to_string(), "context unavailable");
    }

    #[test]
    fn test_serializes_with_path_tuple() {
        let err = ValidationError::new(
            ErrorKind::WrongType,
            KeyPath::root().with_field("transactions").with_index(0),
            "expected dict, found string".to_string(),
            serde_json::json!("oops"),
        );
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["key_path"], serde_json::json!(["transactions", 0]));
        assert_eq!(json["kind"], serde_json::json!("WrongType"));
    }

    #[test]
    fn test_schema_error_messages() {
        let err = SchemaError::DuplicateField {
            name: "port".to_string(),
        };
        assert!(err.to_string().contains("Duplicate field 'port'"));
    }
}
