//! Domain error types
//!
//! This module defines the error hierarchy for Tally. Configuration gaps and
//! render failures are *data* (reports, gate decisions, boundary state), so
//! these variants only cover the operations around them that can genuinely
//! fail: reading env files, initializing logging, building reporters,
//! restarting the process.

use thiserror::Error;

/// Main Tally error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A component failed while rendering
    #[error("Render error: {0}")]
    Render(String),

    /// Error reporting sink errors
    #[error("Error reporting failed: {0}")]
    Reporting(String),

    /// Process restart errors
    #[error("Restart error: {0}")]
    Restart(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

// Conversion from env file loading errors
impl From<dotenvy::Error> for AppError {
    fn from(err: dotenvy::Error) -> Self {
        AppError::Configuration(format!("Env file error: {err}"))
    }
}
