//! Error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors produced while planning or moving plan documents in and out.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid request: {}", join_messages(.0))]
    InvalidRequest(Vec<ValidationError>),

    #[error("invalid planner configuration: {0}")]
    InvalidConfig(String),

    #[error("plan metrics overflowed: {0}")]
    MetricOverflow(String),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_request_lists_all_messages() {
        let err = PlanError::InvalidRequest(vec![
            ValidationError::new(ValidationErrorKind::InvalidMachineCount, "machine count is 0"),
            ValidationError::new(ValidationErrorKind::NegativeDimension, "field 2 has width -1"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid request: machine count is 0; field 2 has width -1"
        );
    }

    #[test]
    fn test_metric_overflow_message() {
        let err = PlanError::MetricOverflow("efficiency is NaN".into());
        assert_eq!(err.to_string(), "plan metrics overflowed: efficiency is NaN");
    }

    #[test]
    fn test_io_error_names_path() {
        let err = PlanError::Io {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.json"));
    }
}
