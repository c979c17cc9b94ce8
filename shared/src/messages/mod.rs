//! Request and response types of the book details service
//!
//! - `details`: the aggregation request and the composite response
//! - `catalog`: list endpoint records
//! - `config`: server configuration

pub mod catalog;
pub mod config;
pub mod details;

pub use catalog::BookSummary;
pub use config::ServerConfig;
pub use details::{BookDetails, DetailsRequest};
