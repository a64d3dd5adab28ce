//! API route configuration.
//!
//! Routes are an explicit table of (method, path) to handler; nothing is
//! discovered at runtime.

use crate::api::handlers::{
    create_expense_handler, delete_expense_handler, info_handler, list_expenses_handler,
    update_expense_handler,
};
use crate::api::middleware::cors;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// All routes mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /expenses`       - List all expenses
/// - `POST   /expenses`       - Create an expense
/// - `PUT    /expenses/{id}`  - Replace (or create) the expense `id`
/// - `DELETE /expenses/{id}`  - Delete the expense `id`
/// - `GET    /info`           - Static API banner
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(expense_routes())
        .route("/info", get(info_handler))
}

/// Expense CRUD routes. Cross-origin requests are allowed from any origin.
pub fn expense_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/expenses",
            get(list_expenses_handler).post(create_expense_handler),
        )
        .route(
            "/expenses/{id}",
            put(update_expense_handler).delete(delete_expense_handler),
        )
        .layer(cors::layer())
}
