//! The set of lookups an aggregation is built from

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::FutureExt;
use shared::{AttributeBag, BookId, DetailsRequest, Resource, UserId};
use tracing::warn;

use crate::traits::{BookDataSource, RecommendationSource};

pub const RECOMMENDATIONS_NEED_USER: &str = "Recommendations require a user id";
pub const RECOMMENDATIONS_DISABLED: &str = "Recommendations are not configured";

pub const LOOKUP_PANICKED: &str = "panicked";
pub const LOOKUP_CANCELLED: &str = "was cancelled";

/// Error bag for a slot whose lookup ended without producing a bag
pub fn abnormal_exit(resource: Resource, reason: &str) -> AttributeBag {
    AttributeBag::error(format!("{resource} lookup {reason}"))
}

/// Sources behind every slot of the aggregate
///
/// Cheap to clone: each concurrent task takes its own copy of the `Arc`s.
#[derive(Clone)]
pub struct FetcherSet {
    data: Arc<dyn BookDataSource>,
    recommendations: Arc<dyn RecommendationSource>,
}

impl FetcherSet {
    pub fn new(data: Arc<dyn BookDataSource>, recommendations: Arc<dyn RecommendationSource>) -> Self {
        Self { data, recommendations }
    }

    /// Fetcher set whose recommendation slot always reports it is unavailable
    pub fn without_recommendations(data: Arc<dyn BookDataSource>) -> Self {
        Self::new(data, Arc::new(DisabledRecommendations))
    }

    pub fn data_source(&self) -> &Arc<dyn BookDataSource> {
        &self.data
    }

    /// Slots to fill for a request, in response order
    pub fn plan(request: &DetailsRequest) -> Vec<Resource> {
        let mut resources = Resource::CORE.to_vec();
        if request.wants_recommendations() {
            resources.push(Resource::Recommendations);
        }
        resources
    }

    /// Run the lookup behind one slot
    pub async fn fetch(&self, resource: Resource, request: &DetailsRequest) -> AttributeBag {
        let book_id = &request.book_id;
        match resource {
            Resource::Metadata => self.data.fetch_metadata(book_id).await,
            Resource::Pricing => self.data.fetch_pricing(book_id).await,
            Resource::Inventory => self.data.fetch_inventory(book_id).await,
            Resource::Reviews => self.data.fetch_reviews(book_id).await,
            Resource::Recommendations => match &request.user_id {
                Some(user_id) => self.recommendations.fetch_recommendations(book_id, user_id).await,
                None => AttributeBag::error(RECOMMENDATIONS_NEED_USER),
            },
        }
    }

    /// Run one slot's lookup; a panic becomes an error bag for that slot only
    pub async fn fetch_caught(&self, resource: Resource, request: &DetailsRequest) -> AttributeBag {
        match AssertUnwindSafe(self.fetch(resource, request)).catch_unwind().await {
            Ok(bag) => bag,
            Err(_) => {
                warn!(%resource, "lookup panicked");
                abnormal_exit(resource, LOOKUP_PANICKED)
            }
        }
    }
}

/// Stand-in used when no recommendation API is wired up
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledRecommendations;

#[async_trait]
impl RecommendationSource for DisabledRecommendations {
    async fn fetch_recommendations(&self, _book_id: &BookId, _user_id: &UserId) -> AttributeBag {
        AttributeBag::error(RECOMMENDATIONS_DISABLED)
    }
}
