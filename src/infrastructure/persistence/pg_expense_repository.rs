//! PostgreSQL implementation of expense repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Expense, ExpenseDraft};
use crate::domain::repositories::ExpenseRepository;
use crate::error::AppError;

/// PostgreSQL repository for expense storage.
///
/// Uses SQLx prepared statements for SQL injection protection and type safety.
pub struct PgExpenseRepository {
    pool: Arc<PgPool>,
}

impl PgExpenseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn insert(&self, draft: ExpenseDraft) -> Result<Expense, AppError> {
        let row = sqlx::query_as::<_, ExpenseRow>(
            r#"
            INSERT INTO expenses (title, category, amount, expense_date, payment_method)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, category, amount, expense_date, payment_method
            "#,
        )
        .bind(draft.title)
        .bind(draft.category)
        .bind(draft.amount)
        .bind(draft.date)
        .bind(draft.payment_method)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    /// Moves the id sequence past `id`, then inserts or replaces the row `id`.
    ///
    /// The sequence is advanced first: `setval` is not rolled back with the
    /// transaction, so a concurrent generated insert can never draw `id`
    /// between our insert and the bump. The sequence never moves backwards.
    async fn upsert(&self, id: i64, draft: ExpenseDraft) -> Result<Expense, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            SELECT setval('expenses_id_seq', $1)
            FROM expenses_id_seq
            WHERE $1 > 0 AND (NOT is_called OR last_value < $1)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let row = sqlx::query_as::<_, ExpenseRow>(
            r#"
            INSERT INTO expenses (id, title, category, amount, expense_date, payment_method)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                category = EXCLUDED.category,
                amount = EXCLUDED.amount,
                expense_date = EXCLUDED.expense_date,
                payment_method = EXCLUDED.payment_method
            RETURNING id, title, category, amount, expense_date, payment_method
            "#,
        )
        .bind(id)
        .bind(draft.title)
        .bind(draft.category)
        .bind(draft.amount)
        .bind(draft.date)
        .bind(draft.payment_method)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into())
    }
}

#[derive(Debug, FromRow)]
struct ExpenseRow {
    id: i64,
    title: String,
    category: String,
    amount: f64,
    expense_date: NaiveDate,
    payment_method: String,
}

impl From<ExpenseRow> for Expense {
    fn from(r: ExpenseRow) -> Self {
        Expense::new(
            r.id,
            r.title,
            r.category,
            r.amount,
            r.expense_date,
            r.payment_method,
        )
    }
}

#[async_trait]
impl ExpenseRepository for PgExpenseRepository {
    async fn save(&self, draft: ExpenseDraft) -> Result<Expense, AppError> {
        match draft.id {
            Some(id) => self.upsert(id, draft).await,
            None => self.insert(draft).await,
        }
    }

    async fn find_all(&self) -> Result<Vec<Expense>, AppError> {
        let rows = sqlx::query_as::<_, ExpenseRow>(
            r#"
            SELECT id, title, category, amount, expense_date, payment_method
            FROM expenses
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Expense::from).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> bool {
        match sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
        {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = ?e, "Database health check failed");
                false
            }
        }
    }
}
