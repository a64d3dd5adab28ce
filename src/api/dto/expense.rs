//! DTOs for the expense endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Expense, ExpenseDraft};

/// Request body for `POST /api/expenses` and `PUT /api/expenses/{id}`.
///
/// `id` is optional. On update it is always replaced by the path id.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub payment_method: String,
}

impl From<ExpenseRequest> for ExpenseDraft {
    fn from(r: ExpenseRequest) -> Self {
        ExpenseDraft {
            id: r.id,
            title: r.title,
            category: r.category,
            amount: r.amount,
            date: r.date,
            payment_method: r.payment_method,
        }
    }
}

/// JSON representation of a stored expense.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseResponse {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub payment_method: String,
}

impl From<Expense> for ExpenseResponse {
    fn from(e: Expense) -> Self {
        Self {
            id: e.id,
            title: e.title,
            category: e.category,
            amount: e.amount,
            date: e.date,
            payment_method: e.payment_method,
        }
    }
}
