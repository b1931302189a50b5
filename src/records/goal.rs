//! Savings goals

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::fields::{
    deserialize_number, deserialize_stored_number, deserialize_stored_text, deserialize_text,
    RecordId, Timestamp,
};
use super::{Entity, NewEntity, CREATED_AT};
use crate::store::SortOrder;

/// Stored savings goal
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(rename = "_id", default)]
    #[schema(value_type = Option<String>)]
    pub id: Option<RecordId>,

    #[serde(default, deserialize_with = "deserialize_stored_text")]
    pub goal_name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_stored_number")]
    pub target_amount: Option<f64>,

    /// Free text; the analysis jobs read it as a month count
    #[serde(default, deserialize_with = "deserialize_stored_text")]
    pub timeframe: Option<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub created_at: Option<Timestamp>,
}

impl Entity for Goal {
    const COLLECTION: &'static str = "goals";
    const ORDER: SortOrder = SortOrder::descending(CREATED_AT);
}

/// Goal as submitted by a client
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_name: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_number",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<f64>)]
    pub target_amount: Option<f64>,

    #[serde(
        default,
        deserialize_with = "deserialize_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeframe: Option<String>,
}

impl NewEntity for NewGoal {
    type Entity = Goal;
}
