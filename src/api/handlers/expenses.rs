//! Handlers for expense endpoints (create, list, update, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::expense::{ExpenseRequest, ExpenseResponse};
use crate::domain::entities::ExpenseDraft;
use crate::error::AppError;
use crate::state::AppState;

/// Creates an expense.
///
/// # Endpoint
///
/// `POST /api/expenses`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Groceries",
///   "category": "Food",
///   "amount": 42.5,
///   "date": "2025-03-14",
///   "paymentMethod": "Card"
/// }
/// ```
///
/// An `id` in the body is honoured: the record is created or replaced under it.
///
/// # Errors
///
/// Storage failures surface as 500 Internal Server Error.
pub async fn create_expense_handler(
    State(state): State<AppState>,
    Json(payload): Json<ExpenseRequest>,
) -> Result<Json<ExpenseResponse>, AppError> {
    let expense = state.expense_service.save(payload.into()).await?;

    Ok(Json(expense.into()))
}

/// Lists every expense, ordered by ascending id.
///
/// # Endpoint
///
/// `GET /api/expenses`
pub async fn list_expenses_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpenseResponse>>, AppError> {
    let expenses = state.expense_service.find_all().await?;

    Ok(Json(
        expenses.into_iter().map(ExpenseResponse::from).collect(),
    ))
}

/// Replaces an expense.
///
/// # Endpoint
///
/// `PUT /api/expenses/{id}`
///
/// # Behavior
///
/// The path id always wins over any `id` in the body. If no expense with that
/// id exists, one is created under it.
pub async fn update_expense_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<ExpenseRequest>,
) -> Result<Json<ExpenseResponse>, AppError> {
    let draft = ExpenseDraft::from(payload).with_id(id);
    let expense = state.expense_service.save(draft).await?;

    Ok(Json(expense.into()))
}

/// Deletes an expense.
///
/// # Endpoint
///
/// `DELETE /api/expenses/{id}`
///
/// Responds `200 OK` with an empty body whether or not the id existed.
pub async fn delete_expense_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.expense_service.delete_by_id(id).await?;

    Ok(StatusCode::OK)
}
