//! Catalog listing records

use serde::{Deserialize, Serialize};

/// One entry of the book list endpoint
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BookSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub price: f64,
}
