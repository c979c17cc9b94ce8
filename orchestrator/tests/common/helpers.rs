//! Test helpers for orchestrator tests

use std::sync::Arc;

use orchestrator::{Aggregator, FetcherSet};
use shared::{BookDetails, BookId, DetailsRequest, ExecutionMode, Resource, UserId};

use super::fixtures::{ScriptedSource, TestFixtures};

pub struct TestHelpers;

impl TestHelpers {
    pub fn request(book_id: &str) -> DetailsRequest {
        DetailsRequest::new(BookId::new(book_id).unwrap())
    }

    pub fn request_with_user(book_id: &str) -> DetailsRequest {
        Self::request(book_id).with_user(UserId::new(TestFixtures::USER_ID).unwrap())
    }

    /// Aggregator whose data and recommendation slots both use `source`
    pub fn aggregator(source: &ScriptedSource) -> Aggregator {
        Aggregator::new(FetcherSet::new(Arc::new(source.clone()), Arc::new(source.clone())))
    }

    /// Aggregate the same request once per mode
    pub async fn run_both(aggregator: &Aggregator, request: &DetailsRequest) -> (BookDetails, BookDetails) {
        let sequential = aggregator.aggregate(ExecutionMode::Sequential, request).await;
        let concurrent = aggregator.aggregate(ExecutionMode::Concurrent, request).await;
        (sequential, concurrent)
    }

    /// Every requested slot holds a bag, and non-failed bags belong to their slot
    pub fn assert_fully_populated(details: &BookDetails, expect_recommendations: bool) {
        for resource in Resource::CORE {
            let bag = details.bag(resource).expect("core slot is always present");
            assert!(!bag.is_empty(), "{resource} slot is empty");
            if !bag.is_error() {
                assert_eq!(
                    bag.get("resource").and_then(|v| v.as_str()),
                    Some(resource.as_str()),
                    "{resource} slot holds another slot's bag"
                );
            }
        }
        assert_eq!(details.recommendations.is_some(), expect_recommendations);
    }
}
