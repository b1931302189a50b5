//! API module - HTTP routes, handlers, and models

pub mod chart_handlers;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod routes;
