//! Finance Data API
//!
//! A small HTTP service that stores and serves expenses, savings goals,
//! SMS-derived transactions and the chart aggregates produced by the
//! offline analysis jobs, all kept in MongoDB.

pub mod api;
pub mod config;
pub mod error;
pub mod records;
pub mod repository;
pub mod store;

pub use error::{AppError, Result};

use std::sync::Arc;

use repository::Repositories;
use store::DocumentStore;

/// Application state shared across all handlers
pub struct AppState {
    pub settings: Arc<config::Settings>,
    pub store: Arc<dyn DocumentStore>,
    pub repositories: Repositories,
}

impl AppState {
    pub fn new(settings: config::Settings, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            settings: Arc::new(settings),
            repositories: Repositories::new(store.clone()),
            store,
        }
    }
}
