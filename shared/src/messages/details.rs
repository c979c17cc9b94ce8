//! Aggregation request and composite response

use serde::{Deserialize, Serialize};

use crate::types::{AttributeBag, BookId, Resource, UserId};

/// What a caller asks the aggregator for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsRequest {
    pub book_id: BookId,
    /// Present when the recommendations slot should be filled
    pub user_id: Option<UserId>,
}

impl DetailsRequest {
    pub fn new(book_id: BookId) -> Self {
        Self {
            book_id,
            user_id: None,
        }
    }

    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn wants_recommendations(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Composite response for one book
///
/// Field order is the serialized order and never depends on which lookup
/// finished first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDetails {
    pub book_id: BookId,
    pub metadata: AttributeBag,
    pub pricing: AttributeBag,
    pub inventory: AttributeBag,
    pub reviews: AttributeBag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<AttributeBag>,
    /// Wall-clock time spent aggregating, in milliseconds
    pub duration: u64,
}

impl BookDetails {
    /// Bag held in the given slot, if that slot was requested
    pub fn bag(&self, resource: Resource) -> Option<&AttributeBag> {
        match resource {
            Resource::Metadata => Some(&self.metadata),
            Resource::Pricing => Some(&self.pricing),
            Resource::Inventory => Some(&self.inventory),
            Resource::Reviews => Some(&self.reviews),
            Resource::Recommendations => self.recommendations.as_ref(),
        }
    }

    /// Slots whose lookup failed
    pub fn failed_resources(&self) -> Vec<Resource> {
        Resource::CORE
            .into_iter()
            .chain(std::iter::once(Resource::Recommendations))
            .filter(|r| self.bag(*r).is_some_and(AttributeBag::is_error))
            .collect()
    }

    /// Same response with the timing zeroed, for comparing outcomes
    pub fn without_duration(&self) -> Self {
        Self {
            duration: 0,
            ..self.clone()
        }
    }
}
