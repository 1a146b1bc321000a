//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Console core error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ConsoleError {
    /// User input failed validation (shown to the user verbatim)
    #[error("{0}")]
    Validation(String),

    /// Record not found in the store
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Another record already uses this identifier
    #[error("Identifier already exists: {0}")]
    DuplicateIdentifier(String),

    /// Operation not allowed in the current form mode
    #[error("Invalid form state: {0}")]
    InvalidFormState(String),

    /// The strong random source could not be read
    #[error("Secure random source unavailable: {0}")]
    EntropyUnavailable(String),

    /// Submission target rejected or failed to accept the payload
    #[error("Submission failed: {0}")]
    Submission(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration load/save error
    #[error("Config error: {0}")]
    Config(String),
}

impl ConsoleError {
    /// Whether it is expected behavior (user input, missing record, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_)
            | Self::RecordNotFound(_)
            | Self::DuplicateIdentifier(_)
            | Self::InvalidFormState(_) => true,
            Self::EntropyUnavailable(_)
            | Self::Submission(_)
            | Self::Serialization(_)
            | Self::Config(_) => false,
        }
    }

    /// Message suitable for a user-facing dialog
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Console core Result type alias
pub type ConsoleResult<T> = std::result::Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_expected() {
        assert!(ConsoleError::Validation("x".into()).is_expected());
        assert!(ConsoleError::DuplicateIdentifier("a".into()).is_expected());
        assert!(!ConsoleError::EntropyUnavailable("os".into()).is_expected());
    }

    #[test]
    fn validation_message_is_shown_verbatim() {
        let err = ConsoleError::Validation("Please provide a client name.".into());
        assert_eq!(err.user_message(), "Please provide a client name.");
        assert_eq!(err.to_string(), "Please provide a client name.");
    }

    #[test]
    fn error_serializes_with_code_tag() {
        let err = ConsoleError::RecordNotFound("john.doe".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "RecordNotFound");
        assert_eq!(json["details"], "john.doe");
    }
}
