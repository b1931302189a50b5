//! API response models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::records::{Expense, Goal};

/// Acknowledgement returned by the expense and goal writes
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SavedResponse {
    pub message: String,
}

/// Acknowledgement returned by the SMS write
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExpenseListResponse {
    pub expenses: Vec<Expense>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GoalListResponse {
    pub goals: Vec<Goal>,
}

/// Health check response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: DatabaseHealth,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct DatabaseHealth {
    pub name: String,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
