//! Per-entity accessors over the document store

use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::Result;
use crate::records::{
    AiCategory, AiRecommendation, CategoryChart, Entity, Expense, Goal, Message, MonthlyChart,
    NewEntity, SmsMessage, Summary, Timestamp, CREATED_AT,
};
use crate::store::{DocumentStore, SortOrder, StoreError};

/// Insert/list access to the collection behind one entity
pub struct Repository<E> {
    store: Arc<dyn DocumentStore>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> Repository<E> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// Validate and write one record, returning it as stored
    pub async fn insert<N>(&self, record: &N) -> Result<E>
    where
        N: NewEntity<Entity = E>,
    {
        record.validate()?;

        let mut document = bson::to_document(record).map_err(StoreError::from)?;
        if N::TIMESTAMPED {
            document.insert(CREATED_AT, Timestamp::now());
        }

        let id = self.store.insert_one(E::COLLECTION, document.clone()).await?;
        document.insert("_id", id);

        info!(collection = E::COLLECTION, "Record saved");

        let stored = bson::from_document(document).map_err(StoreError::from)?;
        Ok(stored)
    }

    /// Every record in the entity's default order
    pub async fn list(&self) -> Result<Vec<E>> {
        self.list_sorted(&E::ORDER).await
    }

    /// Every record in the given order
    pub async fn list_sorted(&self, order: &SortOrder) -> Result<Vec<E>> {
        let documents = self.store.find_sorted(E::COLLECTION, order).await?;

        debug!(
            collection = E::COLLECTION,
            sort = %order.field,
            count = documents.len(),
            "Listing records"
        );

        let records = documents
            .into_iter()
            .map(bson::from_document)
            .collect::<std::result::Result<Vec<E>, _>>()
            .map_err(StoreError::from)?;
        Ok(records)
    }
}

/// One repository per entity, all sharing the same store
#[derive(Clone)]
pub struct Repositories {
    pub expenses: Repository<Expense>,
    pub goals: Repository<Goal>,
    pub monthly_charts: Repository<MonthlyChart>,
    pub ai_categories: Repository<AiCategory>,
    pub ai_recommendations: Repository<AiRecommendation>,
    pub summaries: Repository<Summary>,
    pub category_charts: Repository<CategoryChart>,
    pub sms_messages: Repository<SmsMessage>,
    pub messages: Repository<Message>,
}

impl Repositories {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            expenses: Repository::new(store.clone()),
            goals: Repository::new(store.clone()),
            monthly_charts: Repository::new(store.clone()),
            ai_categories: Repository::new(store.clone()),
            ai_recommendations: Repository::new(store.clone()),
            summaries: Repository::new(store.clone()),
            category_charts: Repository::new(store.clone()),
            sms_messages: Repository::new(store.clone()),
            messages: Repository::new(store),
        }
    }
}
