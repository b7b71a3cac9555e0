/*!
 * Error types for the famform library.
 *
 * This module contains custom error types for different parts of the library,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while assembling or mutating a form page
#[derive(Error, Debug)]
pub enum PageError {
    /// Error when a container id does not exist
    #[error("Unknown container: {0}")]
    UnknownContainer(String),

    /// Error when a container id is registered twice
    #[error("Duplicate container: {0}")]
    DuplicateContainer(String),

    /// Error when an input name is already taken by an incompatible input
    #[error("Duplicate input: {0}")]
    DuplicateInput(String),

    /// Error when a radio input is added without a choice value
    #[error("Radio inputs require a choice value: {0}")]
    RadioWithoutValue(String),
}

/// Errors that can occur when handling a submission response
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// Error when the response body is not valid JSON
    #[error("Failed to parse submission response: {0}")]
    Parse(String),
}

/// Main library error type that wraps all other errors
#[derive(Error, Debug)]
pub enum FormError {
    /// Error from page assembly or mutation
    #[error("Page error: {0}")]
    Page(#[from] PageError),

    /// Error from submission response handling
    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),

    /// Error from resolving a field name
    #[error("Field error: {0}")]
    Field(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for FormError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<serde_json::Error> for SubmissionError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}
