//! Trait definitions for dependency injection
//!
//! Every lookup the orchestrators perform goes through these traits so the
//! store and the recommendation API can be swapped for doubles in tests.
//! None of the lookups return `Result`: a failure comes back as an error bag.

use async_trait::async_trait;

use shared::{AttributeBag, BookDetails, BookId, BookSummary, DetailsRequest, ExecutionMode, UserId};

/// Book data lookups (metadata, pricing, inventory, reviews)
#[mockall::automock]
#[async_trait]
pub trait BookDataSource: Send + Sync {
    /// Title, author, isbn, publish date and description
    async fn fetch_metadata(&self, book_id: &BookId) -> AttributeBag;

    /// Price, currency, discount, sale price and promotion
    async fn fetch_pricing(&self, book_id: &BookId) -> AttributeBag;

    /// Stock level, warehouse and shipping estimate
    async fn fetch_inventory(&self, book_id: &BookId) -> AttributeBag;

    /// Rating summary with its per-star breakdown
    async fn fetch_reviews(&self, book_id: &BookId) -> AttributeBag;

    /// Every book in the catalog
    async fn list_books(&self) -> Vec<BookSummary>;
}

/// Personalised recommendation lookup
#[mockall::automock]
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn fetch_recommendations(&self, book_id: &BookId, user_id: &UserId) -> AttributeBag;
}

/// A strategy for assembling [`BookDetails`]
#[async_trait]
pub trait DetailsOrchestrator: Send + Sync {
    /// Fetch every requested slot and assemble the response.
    ///
    /// Always returns a fully populated aggregate; failed lookups land in
    /// their slot as error bags.
    async fn aggregate(&self, request: &DetailsRequest) -> BookDetails;

    fn mode(&self) -> ExecutionMode;
}
