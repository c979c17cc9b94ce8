//! Service-specific tests
//!
//! Each service has its own test file with dedicated fixtures and helpers.

mod recommendation_client;

// Common test utilities for services
pub mod common {
    use shared::{BookId, UserId};

    pub fn book(id: &str) -> BookId {
        BookId::new(id).expect("valid test book id")
    }

    pub fn user(id: &str) -> UserId {
        UserId::new(id).expect("valid test user id")
    }
}
