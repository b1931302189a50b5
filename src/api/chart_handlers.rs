//! Read-only endpoints over the aggregates written by the analysis jobs.
//!
//! Failures here answer with `{"message": ...}` rather than `{"error": ...}`.

use crate::error::MessageError;
use crate::records::{AiCategory, AiRecommendation, CategoryChart, MonthlyChart, Summary};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// Monthly spend totals, January first
#[utoipa::path(
    get,
    path = "/api/monthly-expenses",
    tag = "Charts",
    responses(
        (status = 200, description = "Monthly totals", body = [MonthlyChart]),
        (status = 500, description = "Store failure", body = crate::error::MessageBody),
    )
)]
pub async fn monthly_expenses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MonthlyChart>>, MessageError> {
    Ok(Json(state.repositories.monthly_charts.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/ai-categories",
    tag = "Charts",
    responses(
        (status = 200, description = "Category budgets", body = [AiCategory]),
        (status = 500, description = "Store failure", body = crate::error::MessageBody),
    )
)]
pub async fn ai_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AiCategory>>, MessageError> {
    Ok(Json(state.repositories.ai_categories.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/ai-text-recommendations",
    tag = "Charts",
    responses(
        (status = 200, description = "Savings insights", body = [AiRecommendation]),
        (status = 500, description = "Store failure", body = crate::error::MessageBody),
    )
)]
pub async fn ai_text_recommendations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AiRecommendation>>, MessageError> {
    Ok(Json(state.repositories.ai_recommendations.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/monthly-summary",
    tag = "Charts",
    responses(
        (status = 200, description = "Spending predictions", body = [Summary]),
        (status = 500, description = "Store failure", body = crate::error::MessageBody),
    )
)]
pub async fn monthly_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Summary>>, MessageError> {
    Ok(Json(state.repositories.summaries.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/category-data",
    tag = "Charts",
    responses(
        (status = 200, description = "Spend per category", body = [CategoryChart]),
        (status = 500, description = "Store failure", body = crate::error::MessageBody),
    )
)]
pub async fn category_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CategoryChart>>, MessageError> {
    Ok(Json(state.repositories.category_charts.list().await?))
}
