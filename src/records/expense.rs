//! Manually entered expenses

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::fields::{
    deserialize_number, deserialize_stored_number, deserialize_stored_text, RecordId, Timestamp,
};
use super::{Entity, NewEntity, CREATED_AT};
use crate::store::SortOrder;

/// Stored expense
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(rename = "_id", default)]
    #[schema(value_type = Option<String>)]
    pub id: Option<RecordId>,

    #[serde(default, deserialize_with = "deserialize_stored_text")]
    pub expense_name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_stored_text")]
    pub expense_month: Option<String>,

    #[serde(default, deserialize_with = "deserialize_stored_number")]
    pub expense_amount: Option<f64>,

    #[serde(default)]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub created_at: Option<Timestamp>,
}

impl Entity for Expense {
    const COLLECTION: &'static str = "expenses";
    const ORDER: SortOrder = SortOrder::descending(CREATED_AT);
}

/// Expense as submitted by a client
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_month: Option<String>,

    /// Accepts a number or numeric text such as `"4.50"`
    #[serde(
        default,
        deserialize_with = "deserialize_number",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<f64>)]
    pub expense_amount: Option<f64>,
}

impl NewEntity for NewExpense {
    type Entity = Expense;
}
