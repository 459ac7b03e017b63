//! Error types for mob-cli

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Loading or parsing the drop table failed
    #[error(transparent)]
    Core(#[from] mob_core::Error),

    /// Failed to read the preference file
    #[error("failed to read preferences '{path}': {source}")]
    PrefsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
