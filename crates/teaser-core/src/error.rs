//! Error Types

use thiserror::Error;

/// Result type alias for teaser operations
pub type Result<T> = std::result::Result<T, TeaserError>;

/// Teaser error types
///
/// Only setup can fail. Once a page is mounted every transition is total, and an
/// empty-email submit is reported as a [`crate::SubmitOutcome`], not an error.
#[derive(Error, Debug)]
pub enum TeaserError {
    /// The tagline rotation needs at least one phrase
    #[error("Tagline set is empty")]
    EmptyTaglines,

    /// A timer interval was zero
    #[error("Interval `{name}` must be greater than zero")]
    InvalidInterval { name: &'static str },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TeaserError {
    /// Convert to a message suitable for a console banner
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyTaglines => "No taglines configured; add at least one phrase.".into(),
            Self::InvalidInterval { name } => format!("Timing `{name}` must be a positive number of milliseconds."),
            Self::Config(msg) => format!("Invalid page configuration: {msg}"),
            Self::Json(_) => "The page configuration file is not valid JSON.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TeaserError::InvalidInterval { name: "hold_ms" };
        assert_eq!(err.to_string(), "Interval `hold_ms` must be greater than zero");
        assert!(err.user_message().contains("hold_ms"));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: TeaserError = parse.unwrap_err().into();
        assert!(matches!(err, TeaserError::Json(_)));
    }
}
