//! Error types for phpgen

use thiserror::Error;

/// Result type alias for phpgen operations
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur while resolving a target and generating a class.
///
/// Every variant renders as a single line so the command layer can print it
/// as-is.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// No profile under the pool name, or the configuration could not be loaded
    #[error("Invalid configuration: {0}.")]
    ConfigMissing(String),

    #[error("Invalid directory.")]
    DirectoryInvalid,

    #[error("Invalid database.")]
    DatabaseInvalid,

    /// `--table` was never given
    #[error("Table is required.")]
    TableRequired,

    /// `--table` was given with an empty value
    #[error("Invalid table name.")]
    TableInvalid,

    /// `--class` was given with an empty value
    #[error("Invalid class name.")]
    ClassInvalid,

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for CodegenError {
    fn from(err: config::ConfigError) -> Self {
        CodegenError::ConfigMissing(err.to_string())
    }
}

impl From<mysql_async::Error> for CodegenError {
    fn from(err: mysql_async::Error) -> Self {
        CodegenError::Database(err.to_string())
    }
}
