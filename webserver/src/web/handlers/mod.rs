//! Route handlers

pub mod api;
pub mod health;

pub use api::{book_details, list_books, DetailsQuery};
pub use health::health_check;
