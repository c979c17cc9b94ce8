//! Shared types for the book details aggregation service
//!
//! Contains the domain types exchanged between the orchestrator core and the
//! HTTP surface: identifiers, attribute bags, the aggregate response and the
//! execution mode, plus shared errors and tracing setup.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{BookDetails, BookSummary, DetailsRequest, ServerConfig};
