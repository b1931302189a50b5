//! Aggregates written by the external analysis jobs.
//!
//! These collections are read-only here: none of them implements
//! [`NewEntity`](super::NewEntity), so no repository can insert into them.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::fields::{
    deserialize_stored_integer, deserialize_stored_number, deserialize_stored_text, RecordId,
    Timestamp,
};
use super::{Entity, CREATED_AT};
use crate::store::SortOrder;

/// Total spend for one calendar month
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyChart {
    #[serde(rename = "_id", default)]
    #[schema(value_type = Option<String>)]
    pub id: Option<RecordId>,

    #[serde(default, deserialize_with = "deserialize_stored_text")]
    pub month: Option<String>,

    /// 1 = January
    #[serde(default, deserialize_with = "deserialize_stored_integer")]
    pub month_number: Option<i32>,

    #[serde(default, deserialize_with = "deserialize_stored_number")]
    pub value: Option<f64>,

    #[serde(default)]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub created_at: Option<Timestamp>,
}

impl Entity for MonthlyChart {
    const COLLECTION: &'static str = "monthlycharts";
    const ORDER: SortOrder = SortOrder::ascending("monthNumber");
}

/// Current versus recommended monthly spend for a category
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiCategory {
    #[serde(rename = "_id", default)]
    #[schema(value_type = Option<String>)]
    pub id: Option<RecordId>,

    #[serde(default, deserialize_with = "deserialize_stored_text")]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "deserialize_stored_number")]
    pub current: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_stored_number")]
    pub recommended: Option<f64>,

    #[serde(default)]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub created_at: Option<Timestamp>,
}

impl Entity for AiCategory {
    const COLLECTION: &'static str = "aicategories";
    const ORDER: SortOrder = SortOrder::descending(CREATED_AT);
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiRecommendation {
    #[serde(rename = "_id", default)]
    #[schema(value_type = Option<String>)]
    pub id: Option<RecordId>,

    #[serde(default, deserialize_with = "deserialize_stored_text")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "deserialize_stored_text")]
    pub description: Option<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub created_at: Option<Timestamp>,
}

impl Entity for AiRecommendation {
    const COLLECTION: &'static str = "airecommendations";
    const ORDER: SortOrder = SortOrder::descending(CREATED_AT);
}

/// Per-category spending prediction
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(rename = "_id", default)]
    #[schema(value_type = Option<String>)]
    pub id: Option<RecordId>,

    #[serde(default, deserialize_with = "deserialize_stored_text")]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "deserialize_stored_number")]
    pub amount: Option<f64>,

    /// Predicted average monthly spend
    #[serde(default, deserialize_with = "deserialize_stored_number")]
    pub value: Option<f64>,

    /// Display colour, e.g. `#1f77b4`
    #[serde(default, deserialize_with = "deserialize_stored_text")]
    pub color_hex: Option<String>,

    /// Predicted band, e.g. `"850.0 - 1150.0"`
    #[serde(default, deserialize_with = "deserialize_stored_text")]
    pub range: Option<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub created_at: Option<Timestamp>,
}

impl Entity for Summary {
    const COLLECTION: &'static str = "summaries";
    const ORDER: SortOrder = SortOrder::descending(CREATED_AT);
}

/// Combined spend per display category
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryChart {
    #[serde(rename = "_id", default)]
    #[schema(value_type = Option<String>)]
    pub id: Option<RecordId>,

    #[serde(default, deserialize_with = "deserialize_stored_text")]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "deserialize_stored_number")]
    pub value: Option<f64>,

    #[serde(default)]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub created_at: Option<Timestamp>,
}

impl Entity for CategoryChart {
    const COLLECTION: &'static str = "categorycharts";
    const ORDER: SortOrder = SortOrder::descending(CREATED_AT);
}
