//! Device inbox messages, listed newest date first

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::fields::{deserialize_stored_text, RecordId};
use super::{Entity, NewEntity};
use crate::store::SortOrder;

/// Stored message; absent fields are left out of the JSON rather than rendered as `null`
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct Message {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<RecordId>,

    #[serde(
        default,
        deserialize_with = "deserialize_stored_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<String>,

    /// Calendar date as sent by the device, e.g. `2024-01-01`
    #[serde(
        default,
        deserialize_with = "deserialize_stored_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_stored_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_stored_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub body: Option<String>,
}

impl Entity for Message {
    const COLLECTION: &'static str = "messages";
    const ORDER: SortOrder = SortOrder::descending("date");
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct NewMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl NewEntity for NewMessage {
    type Entity = Message;

    const TIMESTAMPED: bool = false;
}
