//! Service implementations
//!
//! Real implementations of the lookup traits for production use

pub mod catalog_store;
pub mod deadline;
pub mod recommendation_client;

#[cfg(test)]
pub mod tests;

pub use catalog_store::{CatalogRecord, CatalogStore, LatencyProfile};
pub use deadline::WithDeadline;
pub use recommendation_client::HttpRecommendationSource;
