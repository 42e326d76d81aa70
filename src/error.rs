//! Custom error types for SpendWise
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::services::validation::Field;

/// The main error type for SpendWise operations
#[derive(Error, Debug)]
pub enum SpendwiseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A persisted blob could not be deserialized
    #[error("Parse error: {0}")]
    Parse(String),

    /// Field-level validation failures, keyed by field
    #[error("Validation failed: {}", format_field_errors(.0))]
    Validation(BTreeMap<Field, String>),

    /// Single-message input errors (settings, registration, CLI arguments)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An operation was attempted without the data it needs
    #[error("{0}")]
    Precondition(String),

    /// No profile has been registered yet
    #[error("No profile registered. Run 'spendwise register <name> <mobile>' first.")]
    NotRegistered,

    /// A profile already exists
    #[error("A profile is already registered for '{0}'")]
    AlreadyRegistered(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

fn format_field_errors(errors: &BTreeMap<Field, String>) -> String {
    errors
        .iter()
        .map(|(field, msg)| format!("{}: {}", field, msg))
        .collect::<Vec<_>>()
        .join("; ")
}

impl SpendwiseError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a precondition failure
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

impl From<std::io::Error> for SpendwiseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendwiseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for SpendWise operations
pub type SpendwiseResult<T> = Result<T, SpendwiseError>;
