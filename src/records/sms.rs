//! Raw SMS forwarded from a phone

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::fields::{deserialize_stored_text, RecordId, Timestamp};
use super::{Entity, NewEntity, CREATED_AT};
use crate::error::{AppError, Result};
use crate::store::SortOrder;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SmsMessage {
    #[serde(rename = "_id", default)]
    #[schema(value_type = Option<String>)]
    pub id: Option<RecordId>,

    #[serde(default, deserialize_with = "deserialize_stored_text")]
    pub body: Option<String>,

    #[serde(default, deserialize_with = "deserialize_stored_text")]
    pub sender: Option<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub created_at: Option<Timestamp>,
}

impl Entity for SmsMessage {
    const COLLECTION: &'static str = "smsmessages";
    const ORDER: SortOrder = SortOrder::descending(CREATED_AT);
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct NewSmsMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, str::is_empty)
}

impl NewEntity for NewSmsMessage {
    type Entity = SmsMessage;

    fn validate(&self) -> Result<()> {
        if is_blank(&self.body) || is_blank(&self.sender) {
            return Err(AppError::Validation("Missing body or sender".to_string()));
        }
        Ok(())
    }
}
