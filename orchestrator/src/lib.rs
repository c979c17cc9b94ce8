//! Orchestrator library for aggregating book details
//!
//! Builds one composite response out of several independent lookups, either
//! sequentially or by fanning out one task per lookup and joining on all of
//! them. Lookups report failures as error bags, so an aggregation always
//! completes with every slot filled.

pub mod core;
pub mod error;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use crate::core::{
    Aggregator, ConcurrentOrchestrator, DisabledRecommendations, FetcherSet, SequentialOrchestrator, SlotResults,
};
pub use error::{OrchestratorError, OrchestratorResult};
pub use services::{CatalogRecord, CatalogStore, HttpRecommendationSource, LatencyProfile, WithDeadline};
pub use traits::{BookDataSource, DetailsOrchestrator, RecommendationSource};
