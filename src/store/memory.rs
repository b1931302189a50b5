//! In-process document store used by tests and local runs without MongoDB

use async_trait::async_trait;
use bson::{oid::ObjectId, Bson, Document};
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering as AtomicOrdering};

use crate::store::{DocumentStore, SortDirection, SortOrder, StoreError};

/// Collections held in memory, sorted on read the way MongoDB compares BSON values
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    unavailable: AtomicBool,
    writes: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail as if the server were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, AtomicOrdering::SeqCst);
    }

    /// Seed a collection directly, bypassing the repositories
    pub fn seed(&self, collection: &str, documents: Vec<Document>) {
        let mut collections = self.collections.write();
        let target = collections.entry(collection.to_string()).or_default();
        for document in documents {
            target.push(with_object_id(document).0);
        }
    }

    /// Number of documents currently stored in a collection
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map_or(0, Vec::len)
    }

    /// Total successful writes since creation
    pub fn write_count(&self) -> u64 {
        self.writes.load(AtomicOrdering::SeqCst)
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(AtomicOrdering::SeqCst) {
            return Err(StoreError::Unavailable(
                "memory store switched off".to_string(),
            ));
        }
        Ok(())
    }
}

/// Put an `_id` first in the document, generating one when absent
fn with_object_id(mut document: Document) -> (Document, Bson) {
    let id = document
        .remove("_id")
        .unwrap_or_else(|| Bson::ObjectId(ObjectId::new()));

    let mut stored = Document::new();
    stored.insert("_id", id.clone());
    for (key, value) in document {
        stored.insert(key, value);
    }
    (stored, id)
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<Bson, StoreError> {
        self.check_available()?;

        let (stored, id) = with_object_id(document);
        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .push(stored);
        self.writes.fetch_add(1, AtomicOrdering::SeqCst);

        Ok(id)
    }

    async fn find_sorted(
        &self,
        collection: &str,
        order: &SortOrder,
    ) -> Result<Vec<Document>, StoreError> {
        self.check_available()?;

        let mut documents = self
            .collections
            .read()
            .get(collection)
            .cloned()
            .unwrap_or_default();

        let field = order.field.as_ref();
        documents.sort_by(|a, b| {
            let ordering = compare_bson(a.get(field), b.get(field));
            match order.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        Ok(documents)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}

/// Position of a value's type in MongoDB's cross-type sort order
fn type_rank(value: Option<&Bson>) -> u8 {
    match value {
        Some(Bson::MinKey) => 0,
        None | Some(Bson::Null) | Some(Bson::Undefined) => 1,
        Some(Bson::Double(_) | Bson::Int32(_) | Bson::Int64(_) | Bson::Decimal128(_)) => 2,
        Some(Bson::String(_) | Bson::Symbol(_)) => 3,
        Some(Bson::Document(_)) => 4,
        Some(Bson::Array(_)) => 5,
        Some(Bson::Binary(_)) => 6,
        Some(Bson::ObjectId(_)) => 7,
        Some(Bson::Boolean(_)) => 8,
        Some(Bson::DateTime(_)) => 9,
        Some(Bson::Timestamp(_)) => 10,
        Some(Bson::RegularExpression(_)) => 11,
        Some(Bson::MaxKey) => 13,
        Some(_) => 12,
    }
}

fn numeric(value: &Bson) -> Option<f64> {
    match value {
        Bson::Double(v) => Some(*v),
        Bson::Int32(v) => Some(f64::from(*v)),
        Bson::Int64(v) => Some(*v as f64),
        _ => None,
    }
}

/// Compare two optional field values
pub fn compare_bson(a: Option<&Bson>, b: Option<&Bson>) -> Ordering {
    let rank = type_rank(a).cmp(&type_rank(b));
    if rank != Ordering::Equal {
        return rank;
    }

    match (a, b) {
        (Some(Bson::String(x)), Some(Bson::String(y))) => x.cmp(y),
        (Some(Bson::ObjectId(x)), Some(Bson::ObjectId(y))) => x.bytes().cmp(&y.bytes()),
        (Some(Bson::Boolean(x)), Some(Bson::Boolean(y))) => x.cmp(y),
        (Some(Bson::DateTime(x)), Some(Bson::DateTime(y))) => {
            x.timestamp_millis().cmp(&y.timestamp_millis())
        }
        (Some(x), Some(y)) => match (numeric(x), numeric(y)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
        _ => Ordering::Equal,
    }
}
