//! Assembly of the fixed-shape aggregate

use tokio::time::Instant;
use tracing::warn;

use shared::{AttributeBag, BookDetails, BookId, Resource};

use crate::core::fetcher_set::abnormal_exit;

const NOT_RUN: &str = "did not run";

/// One bag per slot, collected before assembly
///
/// Slots are filled by resource, so the order bags arrive in does not matter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotResults {
    metadata: Option<AttributeBag>,
    pricing: Option<AttributeBag>,
    inventory: Option<AttributeBag>,
    reviews: Option<AttributeBag>,
    recommendations: Option<AttributeBag>,
}

impl SlotResults {
    /// Store the bag for a slot; a slot keeps the first bag it receives
    pub fn fill(&mut self, resource: Resource, bag: AttributeBag) {
        let slot = match resource {
            Resource::Metadata => &mut self.metadata,
            Resource::Pricing => &mut self.pricing,
            Resource::Inventory => &mut self.inventory,
            Resource::Reviews => &mut self.reviews,
            Resource::Recommendations => &mut self.recommendations,
        };
        if slot.is_some() {
            warn!(%resource, "slot already filled, ignoring second bag");
            return;
        }
        *slot = Some(bag);
    }
}

impl FromIterator<(Resource, AttributeBag)> for SlotResults {
    fn from_iter<I: IntoIterator<Item = (Resource, AttributeBag)>>(iter: I) -> Self {
        let mut slots = Self::default();
        for (resource, bag) in iter {
            slots.fill(resource, bag);
        }
        slots
    }
}

/// Build the response and stamp it with the time elapsed since `started`
pub fn assemble(book_id: BookId, slots: SlotResults, started: Instant) -> BookDetails {
    let core = |bag: Option<AttributeBag>, resource| bag.unwrap_or_else(|| abnormal_exit(resource, NOT_RUN));

    BookDetails {
        book_id,
        metadata: core(slots.metadata, Resource::Metadata),
        pricing: core(slots.pricing, Resource::Pricing),
        inventory: core(slots.inventory, Resource::Inventory),
        reviews: core(slots.reviews, Resource::Reviews),
        recommendations: slots.recommendations,
        duration: elapsed_millis(started),
    }
}

fn elapsed_millis(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_assemble_keeps_slots_and_measures() {
        let started = Instant::now();
        tokio::time::advance(Duration::from_millis(42)).await;

        // Arrival order differs from response order
        let slots: SlotResults = vec![
            (Resource::Reviews, AttributeBag::new().with("total_reviews", 94)),
            (Resource::Pricing, AttributeBag::error("Failed to fetch pricing information")),
            (Resource::Metadata, AttributeBag::new().with("title", "Dopamine Nation")),
            (Resource::Inventory, AttributeBag::new().with("in_stock", false)),
        ]
        .into_iter()
        .collect();
        let details = assemble(BookId::new("4").unwrap(), slots, started);

        assert_eq!(details.book_id.as_str(), "4");
        assert_eq!(details.metadata.get("title").and_then(|v| v.as_str()), Some("Dopamine Nation"));
        assert_eq!(details.pricing.error_message(), Some("Failed to fetch pricing information"));
        assert_eq!(details.inventory.get("in_stock").and_then(|v| v.as_bool()), Some(false));
        assert_eq!(details.reviews.get("total_reviews").and_then(|v| v.as_i64()), Some(94));
        assert!(details.recommendations.is_none());
        assert_eq!(details.duration, 42);
    }

    #[test]
    fn test_slot_keeps_first_bag() {
        let mut slots = SlotResults::default();
        slots.fill(Resource::Pricing, AttributeBag::new().with("price", 1.0));
        slots.fill(Resource::Pricing, AttributeBag::new().with("price", 2.0));

        let details = assemble(BookId::new("1").unwrap(), slots, Instant::now());
        assert_eq!(details.pricing.get("price").and_then(|v| v.as_f64()), Some(1.0));
    }

    #[test]
    fn test_missing_core_slot_is_error_bag() {
        let details = assemble(BookId::new("1").unwrap(), SlotResults::default(), Instant::now());

        assert_eq!(details.reviews.error_message(), Some("reviews lookup did not run"));
        assert_eq!(details.failed_resources().len(), 4);
    }
}
