//! Webserver library for the book details service
//!
//! Exposes the catalog listing and the details aggregation over HTTP, with
//! the execution mode chosen per request.

pub mod config;
pub mod error;
pub mod state;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use config::Args;
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use webserver_impl::{build_fetchers, WebServer};
