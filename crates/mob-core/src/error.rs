//! Error types for mob-core

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mob-core
///
/// Only failures that abort a load live here. Malformed data lines and
/// unparseable numeric fields are absorbed where they are found.
#[derive(Debug, Error)]
pub enum Error {
    /// The data resource could not be retrieved
    #[error("failed to load '{resource}': {message}")]
    TransportFailure { resource: String, message: String },

    /// Header column count differs from the expected schema
    #[error("column count mismatch: expected {expected} columns, found {found}")]
    SchemaMismatch {
        expected: usize,
        found: usize,
        expected_headers: Vec<String>,
        found_headers: Vec<String>,
    },

    /// CSV error from the csv crate
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Build a transport failure for `resource`
    pub fn transport(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Error::TransportFailure {
            resource: resource.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mismatch_message_names_counts() {
        let err = Error::SchemaMismatch {
            expected: 5,
            found: 3,
            expected_headers: vec![],
            found_headers: vec![],
        };
        assert_eq!(
            err.to_string(),
            "column count mismatch: expected 5 columns, found 3"
        );
    }

    #[test]
    fn test_transport_message() {
        let err = Error::transport("data.csv", "not found");
        assert_eq!(err.to_string(), "failed to load 'data.csv': not found");
    }
}
