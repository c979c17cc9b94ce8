//! Core shared types and identifiers

pub mod attributes;

pub use attributes::{AttrValue, AttributeBag};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{SharedError, SharedResult};

/// Opaque identifier of a book
///
/// Only non-emptiness is checked here; whether the book exists is up to the
/// data source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(value: impl Into<String>) -> SharedResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(SharedError::EmptyIdentifier { kind: "book id" });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the user asking for personalised recommendations
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: impl Into<String>) -> SharedResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(SharedError::EmptyIdentifier { kind: "user id" });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the sub-resources of a book are fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// One fetch after another on the calling task
    #[default]
    Sequential,
    /// Every fetch in its own task, joined before assembly
    Concurrent,
}

impl ExecutionMode {
    /// Parse the `mode` query value.
    ///
    /// A missing or empty value selects [`ExecutionMode::Sequential`]. Matching
    /// is case-sensitive and anything else is rejected rather than coerced.
    pub fn from_query(value: Option<&str>) -> SharedResult<Self> {
        match value {
            None | Some("") => Ok(Self::default()),
            Some("sequential") => Ok(Self::Sequential),
            Some("concurrent") => Ok(Self::Concurrent),
            Some(other) => Err(SharedError::InvalidMode {
                value: other.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Concurrent => "concurrent",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-resource slot of the aggregate response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Metadata,
    Pricing,
    Inventory,
    Reviews,
    Recommendations,
}

impl Resource {
    /// The four slots every aggregate carries, in response order
    pub const CORE: [Resource; 4] = [
        Resource::Metadata,
        Resource::Pricing,
        Resource::Inventory,
        Resource::Reviews,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Metadata => "metadata",
            Resource::Pricing => "pricing",
            Resource::Inventory => "inventory",
            Resource::Reviews => "reviews",
            Resource::Recommendations => "recommendations",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
