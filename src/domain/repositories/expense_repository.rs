//! Repository trait for expense data access.

use crate::domain::entities::{Expense, ExpenseDraft};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for expense storage.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgExpenseRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryExpenseRepository`] - Process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// Creates or replaces an expense.
    ///
    /// Without an id the repository assigns the next free one. With an id the
    /// record is inserted under that id, or fully replaced if it already exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save(&self, draft: ExpenseDraft) -> Result<Expense, AppError>;

    /// Returns every stored expense ordered by ascending id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_all(&self) -> Result<Vec<Expense>, AppError>;

    /// Removes the expense with the given id.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if none existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Returns `true` when the backing store answers.
    async fn health_check(&self) -> bool;
}
