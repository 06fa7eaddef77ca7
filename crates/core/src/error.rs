//! Error types for vecpost

use thiserror::Error;

/// Main error type for vecpost operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Parameter `{name}` to {operation} is missing, please check your configuration")]
    MissingParameter {
        operation: &'static str,
        name: &'static str,
    },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Missing attribute `{name}` in {operation}")]
    MissingAttribute {
        operation: &'static str,
        name: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}

/// Result type alias for vecpost operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_message() {
        let err = Error::MissingParameter {
            operation: "intercut",
            name: "attribute",
        };
        let msg = err.to_string();
        assert!(msg.contains("attribute"));
        assert!(msg.contains("intercut"));
    }

    #[test]
    fn test_json_error_is_config() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Config(_)));
    }
}
