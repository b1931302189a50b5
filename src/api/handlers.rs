//! HTTP request handlers for expenses, goals, SMS and messages

use crate::api::extract::ApiJson;
use crate::api::models::{
    DatabaseHealth, ExpenseListResponse, GoalListResponse, HealthResponse, SavedResponse,
    StatusResponse,
};
use crate::error::AppError;
use crate::records::{Message, NewExpense, NewGoal, NewMessage, NewSmsMessage};
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::{info, warn};

/// Save a manually entered expense
#[utoipa::path(
    post,
    path = "/api/addexpense",
    tag = "Expenses",
    request_body = NewExpense,
    responses(
        (status = 200, description = "Expense stored", body = SavedResponse),
        (status = 400, description = "Malformed body", body = crate::error::ErrorBody),
        (status = 500, description = "Store failure", body = crate::error::ErrorBody),
    )
)]
pub async fn add_expense(
    State(state): State<Arc<AppState>>,
    ApiJson(expense): ApiJson<NewExpense>,
) -> Result<Json<SavedResponse>, AppError> {
    info!(
        name = ?expense.expense_name,
        month = ?expense.expense_month,
        "Received expense"
    );

    state.repositories.expenses.insert(&expense).await?;

    Ok(Json(SavedResponse {
        message: "Expense saved to MongoDB!".to_string(),
    }))
}

/// List expenses, newest first
#[utoipa::path(
    get,
    path = "/api/getexpense",
    tag = "Expenses",
    responses(
        (status = 200, description = "All expenses", body = ExpenseListResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorBody),
    )
)]
pub async fn get_expenses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ExpenseListResponse>, AppError> {
    let expenses = state.repositories.expenses.list().await?;
    Ok(Json(ExpenseListResponse { expenses }))
}

/// Save a savings goal
#[utoipa::path(
    post,
    path = "/api/addgoal",
    tag = "Goals",
    request_body = NewGoal,
    responses(
        (status = 200, description = "Goal stored", body = SavedResponse),
        (status = 400, description = "Malformed body", body = crate::error::ErrorBody),
        (status = 500, description = "Store failure", body = crate::error::ErrorBody),
    )
)]
pub async fn add_goal(
    State(state): State<Arc<AppState>>,
    ApiJson(goal): ApiJson<NewGoal>,
) -> Result<Json<SavedResponse>, AppError> {
    info!(name = ?goal.goal_name, timeframe = ?goal.timeframe, "Received goal");

    state.repositories.goals.insert(&goal).await?;

    Ok(Json(SavedResponse {
        message: "Goal saved to MongoDB!".to_string(),
    }))
}

/// List goals, newest first
#[utoipa::path(
    get,
    path = "/api/getgoals",
    tag = "Goals",
    responses(
        (status = 200, description = "All goals", body = GoalListResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorBody),
    )
)]
pub async fn get_goals(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GoalListResponse>, AppError> {
    let goals = state.repositories.goals.list().await?;
    Ok(Json(GoalListResponse { goals }))
}

/// Store a raw SMS; both `body` and `sender` are required
#[utoipa::path(
    post,
    path = "/api/save_sms",
    tag = "Messages",
    request_body = NewSmsMessage,
    responses(
        (status = 200, description = "SMS stored", body = StatusResponse),
        (status = 400, description = "Missing body or sender", body = crate::error::ErrorBody),
        (status = 500, description = "Store failure", body = crate::error::ErrorBody),
    )
)]
pub async fn save_sms(
    State(state): State<Arc<AppState>>,
    ApiJson(sms): ApiJson<NewSmsMessage>,
) -> Result<Json<StatusResponse>, AppError> {
    info!(sender = ?sms.sender, "Received SMS");

    state.repositories.sms_messages.insert(&sms).await?;

    Ok(Json(StatusResponse::success()))
}

/// Store a device message and echo it back with its identifier
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "Messages",
    request_body = NewMessage,
    responses(
        (status = 201, description = "Message stored", body = Message),
        (status = 400, description = "Malformed body", body = crate::error::ErrorBody),
        (status = 500, description = "Store failure", body = crate::error::ErrorBody),
    )
)]
pub async fn create_message(
    State(state): State<Arc<AppState>>,
    ApiJson(message): ApiJson<NewMessage>,
) -> Result<(StatusCode, Json<Message>), AppError> {
    info!(address = ?message.address, date = ?message.date, "Received message");

    let stored = state.repositories.messages.insert(&message).await?;

    Ok((StatusCode::CREATED, Json(stored)))
}

/// List device messages, latest date first
#[utoipa::path(
    get,
    path = "/api/messages",
    tag = "Messages",
    responses(
        (status = 200, description = "All messages", body = [Message]),
        (status = 500, description = "Store failure", body = crate::error::ErrorBody),
    )
)]
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Message>>, AppError> {
    let messages = state.repositories.messages.list().await?;
    Ok(Json(messages))
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service status", body = HealthResponse),
    )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (reachable, error) = match state.store.ping().await {
        Ok(()) => (true, None),
        Err(e) => {
            warn!(error = %e, "Database ping failed");
            (false, Some(e.to_string()))
        }
    };

    Json(HealthResponse {
        status: if reachable { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: DatabaseHealth {
            name: state.settings.database.name.clone(),
            reachable,
            error,
        },
    })
}
