//! Document store abstraction - MongoDB in production, in-memory for tests

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;
use bson::{Bson, Document};
use std::borrow::Cow;
use thiserror::Error;

/// Errors raised by a document store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Driver(#[from] mongodb::error::Error),

    #[error("failed to encode document: {0}")]
    Encode(#[from] bson::ser::Error),

    #[error("failed to decode document: {0}")]
    Decode(#[from] bson::de::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Sort direction for a collection scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn as_i32(self) -> i32 {
        match self {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        }
    }
}

/// Single-field ordering applied to a full collection scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub field: Cow<'static, str>,
    pub direction: SortDirection,
}

impl SortOrder {
    pub const fn ascending(field: &'static str) -> Self {
        Self {
            field: Cow::Borrowed(field),
            direction: SortDirection::Ascending,
        }
    }

    pub const fn descending(field: &'static str) -> Self {
        Self {
            field: Cow::Borrowed(field),
            direction: SortDirection::Descending,
        }
    }

    /// Sort specification in the driver's `{field: 1 | -1}` form
    pub fn to_document(&self) -> Document {
        let mut spec = Document::new();
        spec.insert(self.field.as_ref(), self.direction.as_i32());
        spec
    }
}

/// A collection-oriented store of BSON documents
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Write one document and return the identifier the store assigned to it
    async fn insert_one(&self, collection: &str, document: Document) -> Result<Bson, StoreError>;

    /// Read every document of a collection in the given order
    async fn find_sorted(
        &self,
        collection: &str,
        order: &SortOrder,
    ) -> Result<Vec<Document>, StoreError>;

    /// Round-trip to the store, used by the health endpoint
    async fn ping(&self) -> Result<(), StoreError>;
}
