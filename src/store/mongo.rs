//! MongoDB-backed document store

use async_trait::async_trait;
use bson::{doc, Bson, Document};
use futures::TryStreamExt;
use mongodb::{
    options::{ClientOptions, FindOptions},
    Client, Database,
};
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::store::{DocumentStore, SortOrder, StoreError};

/// Store backed by a single long-lived MongoDB client
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Build the client from configuration.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the
    /// first request rather than here.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&config.uri).await?;
        options.app_name = Some(config.app_name.clone());

        let client = Client::with_options(options)?;
        let database = client.database(&config.name);

        info!(database = %config.name, "MongoDB client initialized");

        Ok(Self { database })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<Bson, StoreError> {
        let result = self
            .database
            .collection::<Document>(collection)
            .insert_one(document, None)
            .await?;

        debug!(collection = %collection, id = %result.inserted_id, "Inserted document");
        Ok(result.inserted_id)
    }

    async fn find_sorted(
        &self,
        collection: &str,
        order: &SortOrder,
    ) -> Result<Vec<Document>, StoreError> {
        let options = FindOptions::builder().sort(order.to_document()).build();

        let cursor = self
            .database
            .collection::<Document>(collection)
            .find(None, options)
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        debug!(collection = %collection, count = documents.len(), "Scanned collection");
        Ok(documents)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}
