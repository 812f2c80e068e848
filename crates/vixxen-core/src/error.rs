//! Error types for the calculation engine

use thiserror::Error;

/// Errors that can stop a calculation
///
/// Degenerate arithmetic (zero burn rate, zero takeoff weight) and policy
/// warnings are not errors; they come back as values in the results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Registration not present in the catalog
    #[error("Unknown aircraft registration: '{0}'")]
    UnknownRegistration(String),

    /// Configuration document could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Catalog entry with unusable weighed data
    #[error("Invalid profile for '{registration}': {message}")]
    InvalidProfile {
        /// Offending registration
        registration: String,
        /// What is wrong with the profile
        message: String,
    },
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::InvalidConfig(err.to_string())
    }
}

/// Result alias used throughout the engine
pub type Result<T> = std::result::Result<T, EngineError>;
