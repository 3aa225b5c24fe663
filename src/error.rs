//! Error types for cloud-nsga.
//!
//! The optimizer loop itself cannot fail once its inputs are validated, so
//! every error here surfaces before the first generation runs.

use thiserror::Error;

use crate::validation::ValidationError;

/// Error type for fallible public entry points.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Tasks, VMs or algorithm parameters failed validation.
    #[error("invalid scheduling input: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    /// An instance file could not be read.
    #[error("failed to read instance file '{path}': {source}")]
    Io {
        /// Path of the file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An instance document was not valid JSON for the expected schema.
    #[error("malformed instance document: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<Vec<ValidationError>> for SchedulerError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SchedulerError::Validation(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias for cloud-nsga operations.
pub type Result<T> = std::result::Result<T, SchedulerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_validation_display_lists_all_messages() {
        let err = SchedulerError::from(vec![
            ValidationError::new(ValidationErrorKind::EmptyTasks, "no tasks"),
            ValidationError::new(ValidationErrorKind::EmptyVms, "no VMs"),
        ]);
        let text = err.to_string();
        assert!(text.contains("no tasks"));
        assert!(text.contains("no VMs"));
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: SchedulerError = parse.unwrap_err().into();
        assert!(matches!(err, SchedulerError::Json(_)));
    }
}
