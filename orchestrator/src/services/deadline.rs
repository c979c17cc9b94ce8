//! Per-lookup deadline decorator
//!
//! Wraps a source and bounds each lookup with a timeout; an expired lookup
//! yields an error bag for its slot. The orchestrators are unaware of it.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use shared::{AttributeBag, BookId, BookSummary, Resource, UserId};

use crate::traits::{BookDataSource, RecommendationSource};

#[derive(Debug, Clone)]
pub struct WithDeadline<S> {
    inner: S,
    deadline: Duration,
}

impl<S> WithDeadline<S> {
    pub fn new(inner: S, deadline: Duration) -> Self {
        Self { inner, deadline }
    }

    async fn bounded<F>(&self, resource: Resource, lookup: F) -> AttributeBag
    where
        F: Future<Output = AttributeBag> + Send,
    {
        match tokio::time::timeout(self.deadline, lookup).await {
            Ok(bag) => bag,
            Err(_) => {
                let millis = self.deadline.as_millis();
                warn!(%resource, deadline_ms = %millis, "lookup exceeded deadline");
                AttributeBag::error(format!("{resource} lookup exceeded deadline of {millis} ms"))
            }
        }
    }
}

#[async_trait]
impl<S> BookDataSource for WithDeadline<S>
where
    S: BookDataSource,
{
    async fn fetch_metadata(&self, book_id: &BookId) -> AttributeBag {
        self.bounded(Resource::Metadata, self.inner.fetch_metadata(book_id)).await
    }

    async fn fetch_pricing(&self, book_id: &BookId) -> AttributeBag {
        self.bounded(Resource::Pricing, self.inner.fetch_pricing(book_id)).await
    }

    async fn fetch_inventory(&self, book_id: &BookId) -> AttributeBag {
        self.bounded(Resource::Inventory, self.inner.fetch_inventory(book_id)).await
    }

    async fn fetch_reviews(&self, book_id: &BookId) -> AttributeBag {
        self.bounded(Resource::Reviews, self.inner.fetch_reviews(book_id)).await
    }

    async fn list_books(&self) -> Vec<BookSummary> {
        self.inner.list_books().await
    }
}

#[async_trait]
impl<S> RecommendationSource for WithDeadline<S>
where
    S: RecommendationSource,
{
    async fn fetch_recommendations(&self, book_id: &BookId, user_id: &UserId) -> AttributeBag {
        self.bounded(
            Resource::Recommendations,
            self.inner.fetch_recommendations(book_id, user_id),
        )
        .await
    }
}
