//! Orchestrator-specific error types
//!
//! Lookups never fail with these: a failed lookup is an error bag. They cover
//! building the collaborators (catalog loading, HTTP client setup).

use thiserror::Error;
use shared::SharedError;

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Catalog could not be loaded from {path}: {message}")]
    CatalogLoad { path: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

pub type OrchestratorResult<T> = Result<T, OrchestratorError>;
