//! Concurrent strategy: fan out one task per slot, join on all of them
//!
//! Each planned slot gets its own spawned task and the task's join handle is
//! the only place its bag comes from, so no slot can receive two values and
//! the aggregate needs no lock. The join waits for the slowest task; nothing
//! is assembled from a subset. A lookup that panics is folded into an error
//! bag for its slot, leaving its siblings untouched. Dropping the aggregation
//! before it completes aborts every task it spawned.

use async_trait::async_trait;
use futures_util::future::join_all;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::Instant;
use tracing::{debug, warn, Instrument};

use shared::{AttributeBag, BookDetails, DetailsRequest, ExecutionMode, Resource};

use crate::core::assembler::{assemble, SlotResults};
use crate::core::fetcher_set::{abnormal_exit, FetcherSet, LOOKUP_CANCELLED, LOOKUP_PANICKED};
use crate::traits::DetailsOrchestrator;

/// Fan-out/fan-in orchestrator; total latency tracks the slowest lookup
#[derive(Clone)]
pub struct ConcurrentOrchestrator {
    fetchers: FetcherSet,
}

impl ConcurrentOrchestrator {
    pub fn new(fetchers: FetcherSet) -> Self {
        Self { fetchers }
    }

    /// Spawn the lookup for one slot; the task owns its copies of the inputs
    fn spawn_slot(&self, resource: Resource, request: &DetailsRequest) -> SlotTask {
        let fetchers = self.fetchers.clone();
        let request = request.clone();
        let handle =
            tokio::spawn(async move { fetchers.fetch_caught(resource, &request).await }.in_current_span());
        SlotTask { resource, handle }
    }
}

/// A spawned slot lookup, aborted if dropped before it finishes
struct SlotTask {
    resource: Resource,
    handle: JoinHandle<AttributeBag>,
}

impl SlotTask {
    /// Wait for the lookup and turn an abnormal task exit into an error bag
    async fn settle(&mut self) -> (Resource, AttributeBag) {
        let bag = match (&mut self.handle).await {
            Ok(bag) => bag,
            Err(err) => {
                warn!(resource = %self.resource, error = %err, "lookup task did not complete");
                abnormal_exit(self.resource, exit_reason(&err))
            }
        };
        (self.resource, bag)
    }
}

impl Drop for SlotTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn exit_reason(err: &JoinError) -> &'static str {
    if err.is_panic() {
        LOOKUP_PANICKED
    } else {
        LOOKUP_CANCELLED
    }
}

#[async_trait]
impl DetailsOrchestrator for ConcurrentOrchestrator {
    async fn aggregate(&self, request: &DetailsRequest) -> BookDetails {
        let started = Instant::now();

        let mut tasks: Vec<SlotTask> = FetcherSet::plan(request)
            .into_iter()
            .map(|resource| self.spawn_slot(resource, request))
            .collect();

        let settled = join_all(tasks.iter_mut().map(|task| task.settle())).await;
        let slots: SlotResults = settled.into_iter().collect();

        let details = assemble(request.book_id.clone(), slots, started);
        debug!(duration_ms = details.duration, "concurrent aggregation assembled");
        details
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Concurrent
    }
}
