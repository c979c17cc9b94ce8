//! Aggregation core
//!
//! Pure coordination logic: which lookups run, in what order or in parallel,
//! and how their bags become one response. No I/O of its own.

pub mod aggregator;
pub mod assembler;
pub mod concurrent;
pub mod fetcher_set;
pub mod sequential;

pub use aggregator::Aggregator;
pub use assembler::{assemble, SlotResults};
pub use concurrent::ConcurrentOrchestrator;
pub use fetcher_set::{DisabledRecommendations, FetcherSet};
pub use sequential::SequentialOrchestrator;
