//! Analyzer error types

use thiserror::Error;

/// Errors raised when a caller bypasses the generator with malformed input
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("invalid scenario: {field}: {reason}")]
    InvalidScenario { field: &'static str, reason: String },
}

impl AnalysisError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidScenario {
            field,
            reason: reason.into(),
        }
    }
}
