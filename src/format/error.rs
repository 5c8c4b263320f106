//! Formatter error types

use thiserror::Error;

/// Errors that can occur while formatting a log object
#[derive(Debug, Error)]
pub enum FormatError {
    /// A value could not be represented as JSON text. Nothing is rendered.
    #[error("failed to serialize {}: {source}", field_label(.field))]
    Serialization {
        /// Field whose value failed, or `None` when the whole object failed
        field: Option<String>,
        #[source]
        source: serde_json::Error,
    },

    /// The content serialized to something other than a JSON object
    #[error("log content must be a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },
}

impl FormatError {
    /// Name of the field that failed to serialize, if known
    pub fn field(&self) -> Option<&str> {
        match self {
            FormatError::Serialization { field, .. } => field.as_deref(),
            FormatError::NotAnObject { .. } => None,
        }
    }
}

fn field_label(field: &Option<String>) -> String {
    match field {
        Some(name) => format!("field `{}`", name),
        None => "log content".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;

    #[test]
    fn test_serialization_message_names_field() {
        let err = FormatError::Serialization {
            field: Some("payload".to_string()),
            source: serde_json::Error::custom("cycle detected"),
        };
        assert_eq!(
            err.to_string(),
            "failed to serialize field `payload`: cycle detected"
        );
        assert_eq!(err.field(), Some("payload"));
    }

    #[test]
    fn test_serialization_message_without_field() {
        let err = FormatError::Serialization {
            field: None,
            source: serde_json::Error::custom("boom"),
        };
        assert_eq!(err.to_string(), "failed to serialize log content: boom");
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_not_an_object_message() {
        let err = FormatError::NotAnObject { kind: "array" };
        assert_eq!(err.to_string(), "log content must be a JSON object, got array");
    }
}
