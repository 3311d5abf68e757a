//! Error types for the FitDash domain

use thiserror::Error;

/// Errors raised by ledger, profile and planner operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        DomainError::NotFound(message.into())
    }
}

/// Plan provider errors
///
/// Every variant is recoverable: callers substitute the offline plan.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Plan provider request failed: {0}")]
    Request(String),

    #[error("Plan provider returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Plan provider timed out after {0}s")]
    Timeout(u64),

    #[error("Could not parse plan: {0}")]
    Parse(String),

    #[error("Plan has an invalid shape: {0}")]
    Shape(String),
}

impl From<serde_json::Error> for PlanError {
    fn from(err: serde_json::Error) -> Self {
        PlanError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_messages() {
        let err = DomainError::validation("Calories cannot be negative");
        assert_eq!(err.to_string(), "Validation error: Calories cannot be negative");

        let err = DomainError::not_found("No plan generated yet");
        assert_eq!(err.to_string(), "Not found: No plan generated yet");
    }

    #[test]
    fn test_plan_error_from_json() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(PlanError::from(err), PlanError::Parse(_)));
    }
}
