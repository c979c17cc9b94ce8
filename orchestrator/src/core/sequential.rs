//! Sequential strategy: one lookup after another on the calling task

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::debug;

use shared::{BookDetails, DetailsRequest, ExecutionMode};

use crate::core::assembler::{assemble, SlotResults};
use crate::core::fetcher_set::FetcherSet;
use crate::traits::DetailsOrchestrator;

/// Baseline orchestrator; total latency is the sum of every lookup
#[derive(Clone)]
pub struct SequentialOrchestrator {
    fetchers: FetcherSet,
}

impl SequentialOrchestrator {
    pub fn new(fetchers: FetcherSet) -> Self {
        Self { fetchers }
    }
}

#[async_trait]
impl DetailsOrchestrator for SequentialOrchestrator {
    async fn aggregate(&self, request: &DetailsRequest) -> BookDetails {
        let started = Instant::now();

        let mut slots = SlotResults::default();
        for resource in FetcherSet::plan(request) {
            let bag = self.fetchers.fetch_caught(resource, request).await;
            slots.fill(resource, bag);
        }

        let details = assemble(request.book_id.clone(), slots, started);
        debug!(duration_ms = details.duration, "sequential aggregation assembled");
        details
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
