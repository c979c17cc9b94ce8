//! Mode selection and dispatch to the matching orchestrator

use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use shared::{BookDetails, BookSummary, DetailsRequest, ExecutionMode, SharedResult};

use crate::core::concurrent::ConcurrentOrchestrator;
use crate::core::fetcher_set::FetcherSet;
use crate::core::sequential::SequentialOrchestrator;
use crate::traits::DetailsOrchestrator;

/// Entry point for building book details in either mode
#[derive(Clone)]
pub struct Aggregator {
    fetchers: FetcherSet,
    sequential: SequentialOrchestrator,
    concurrent: ConcurrentOrchestrator,
}

impl Aggregator {
    pub fn new(fetchers: FetcherSet) -> Self {
        Self {
            sequential: SequentialOrchestrator::new(fetchers.clone()),
            concurrent: ConcurrentOrchestrator::new(fetchers.clone()),
            fetchers,
        }
    }

    pub fn orchestrator(&self, mode: ExecutionMode) -> &dyn DetailsOrchestrator {
        match mode {
            ExecutionMode::Sequential => &self.sequential,
            ExecutionMode::Concurrent => &self.concurrent,
        }
    }

    /// Parse the raw mode value and aggregate.
    ///
    /// An invalid mode is returned as an error before any lookup runs.
    pub async fn dispatch(&self, mode: Option<&str>, request: &DetailsRequest) -> SharedResult<BookDetails> {
        let mode = ExecutionMode::from_query(mode)?;
        Ok(self.aggregate(mode, request).await)
    }

    pub async fn aggregate(&self, mode: ExecutionMode, request: &DetailsRequest) -> BookDetails {
        let span = info_span!(
            "aggregate",
            request_id = %Uuid::new_v4(),
            book_id = %request.book_id,
            %mode,
        );

        async {
            let details = self.orchestrator(mode).aggregate(request).await;
            let failed = details.failed_resources();
            info!(
                duration_ms = details.duration,
                failed = failed.len(),
                "{} processing completed in {} ms",
                mode,
                details.duration
            );
            details
        }
        .instrument(span)
        .await
    }

    /// Catalog listing, read straight through from the data source
    pub async fn list_books(&self) -> Vec<BookSummary> {
        self.fetchers.data_source().list_books().await
    }
}
