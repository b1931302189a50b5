//! HTTP route definitions

use crate::api::models::*;
use crate::api::{chart_handlers, handlers};
use crate::error::{ErrorBody, MessageBody};
use crate::records::{
    AiCategory, AiRecommendation, CategoryChart, Expense, Goal, Message, MonthlyChart,
    NewExpense, NewGoal, NewMessage, NewSmsMessage, Summary,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Finance Data API",
        version = "0.1.0",
        description = "Expenses, goals, SMS transactions and spending charts backed by MongoDB.",
        license(name = "MIT"),
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        handlers::add_expense,
        handlers::get_expenses,
        handlers::add_goal,
        handlers::get_goals,
        handlers::save_sms,
        handlers::create_message,
        handlers::list_messages,
        handlers::health_check,
        chart_handlers::monthly_expenses,
        chart_handlers::ai_categories,
        chart_handlers::ai_text_recommendations,
        chart_handlers::monthly_summary,
        chart_handlers::category_data,
    ),
    components(schemas(
        NewExpense,
        Expense,
        NewGoal,
        Goal,
        NewSmsMessage,
        NewMessage,
        Message,
        MonthlyChart,
        AiCategory,
        AiRecommendation,
        Summary,
        CategoryChart,
        SavedResponse,
        StatusResponse,
        ExpenseListResponse,
        GoalListResponse,
        HealthResponse,
        DatabaseHealth,
        ErrorBody,
        MessageBody,
    )),
    tags(
        (name = "Expenses", description = "Manually entered expenses"),
        (name = "Goals", description = "Savings goals"),
        (name = "Messages", description = "SMS and device messages"),
        (name = "Charts", description = "Read-only aggregates from the analysis jobs"),
        (name = "Health", description = "Health and monitoring endpoints"),
    )
)]
pub struct ApiDoc;

/// Routes under `/api`
fn api_routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .route("/addexpense", post(handlers::add_expense))
        .route("/getexpense", get(handlers::get_expenses))
        .route("/addgoal", post(handlers::add_goal))
        .route("/getgoals", get(handlers::get_goals))
        .route("/monthly-expenses", get(chart_handlers::monthly_expenses))
        .route("/ai-categories", get(chart_handlers::ai_categories))
        .route(
            "/ai-text-recommendations",
            get(chart_handlers::ai_text_recommendations),
        )
        .route("/monthly-summary", get(chart_handlers::monthly_summary))
        .route("/category-data", get(chart_handlers::category_data))
        .route("/save_sms", post(handlers::save_sms))
        .route(
            "/messages",
            get(handlers::list_messages).post(handlers::create_message),
        )
}

/// Create the main application router
pub fn create_router(state: Arc<crate::AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check endpoint
        .route("/health", get(handlers::health_check))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes())
        // Add shared state
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
