#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use budget_tracker::application::services::ExpenseService;
use budget_tracker::domain::entities::{Expense, ExpenseDraft};
use budget_tracker::domain::repositories::ExpenseRepository;
use budget_tracker::error::AppError;
use budget_tracker::infrastructure::persistence::{InMemoryExpenseRepository, PgExpenseRepository};
use budget_tracker::routes::router;
use budget_tracker::state::AppState;
use chrono::NaiveDate;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state() -> AppState {
    state_with(Arc::new(InMemoryExpenseRepository::new()))
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    state_with(Arc::new(PgExpenseRepository::new(Arc::new(pool))))
}

pub fn state_with(repository: Arc<dyn ExpenseRepository>) -> AppState {
    AppState::new(Arc::new(ExpenseService::new(repository)))
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

pub fn expense_json(title: &str, amount: f64) -> Value {
    json!({
        "title": title,
        "category": "Food",
        "amount": amount,
        "date": "2025-03-14",
        "paymentMethod": "Card"
    })
}

pub fn draft(id: Option<i64>, title: &str) -> ExpenseDraft {
    ExpenseDraft {
        id,
        title: title.to_string(),
        category: "Shopping".to_string(),
        amount: 25.0,
        date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        payment_method: "Online".to_string(),
    }
}

/// Repository whose every call fails, for exercising error propagation.
pub struct FailingRepository;

#[async_trait]
impl ExpenseRepository for FailingRepository {
    async fn save(&self, _draft: ExpenseDraft) -> Result<Expense, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn find_all(&self) -> Result<Vec<Expense>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn delete_by_id(&self, _id: i64) -> Result<bool, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn health_check(&self) -> bool {
        false
    }
}
