//! Persisted record kinds and the field types they share

pub mod charts;
pub mod expense;
pub mod fields;
pub mod goal;
pub mod message;
pub mod sms;

pub use charts::{AiCategory, AiRecommendation, CategoryChart, MonthlyChart, Summary};
pub use expense::{Expense, NewExpense};
pub use fields::{RecordId, Timestamp};
pub use goal::{Goal, NewGoal};
pub use message::{Message, NewMessage};
pub use sms::{NewSmsMessage, SmsMessage};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;
use crate::store::SortOrder;

/// Field holding the server-assigned creation time
pub const CREATED_AT: &str = "createdAt";

/// A record kind stored in one collection and listed in one order
pub trait Entity: DeserializeOwned + Serialize + Send + Sync + 'static {
    const COLLECTION: &'static str;
    const ORDER: SortOrder;
}

/// The caller-supplied half of a writable record
pub trait NewEntity: Serialize + Send + Sync {
    type Entity: Entity;

    /// Whether `createdAt` is stamped on insert
    const TIMESTAMPED: bool = true;

    /// Checks run before anything is written
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}
