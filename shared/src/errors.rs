//! Shared error types for the book details service

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SharedError {
    #[error("Invalid mode '{value}'. Use 'sequential' or 'concurrent'")]
    InvalidMode { value: String },

    #[error("{kind} must not be empty")]
    EmptyIdentifier { kind: &'static str },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
