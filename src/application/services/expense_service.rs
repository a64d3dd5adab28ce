//! Expense persistence service.

use std::sync::Arc;

use crate::domain::entities::{Expense, ExpenseDraft};
use crate::domain::repositories::ExpenseRepository;
use crate::error::AppError;

/// Service the HTTP layer delegates every expense operation to.
///
/// Holds no state of its own beyond the injected repository handle, so a single
/// instance is shared across all requests.
pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepository>,
}

impl ExpenseService {
    /// Creates a new expense service.
    pub fn new(repository: Arc<dyn ExpenseRepository>) -> Self {
        Self { repository }
    }

    /// Creates or replaces an expense.
    ///
    /// Used for both create and update: updates arrive with the path id already
    /// written into the draft, so the repository upsert replaces that record.
    ///
    /// # Errors
    ///
    /// Propagates repository errors unchanged.
    pub async fn save(&self, draft: ExpenseDraft) -> Result<Expense, AppError> {
        let requested_id = draft.id;
        let expense = self.repository.save(draft).await?;

        tracing::debug!(id = expense.id, ?requested_id, "Expense saved");
        Ok(expense)
    }

    /// Returns all expenses ordered by ascending id.
    ///
    /// # Errors
    ///
    /// Propagates repository errors unchanged.
    pub async fn find_all(&self) -> Result<Vec<Expense>, AppError> {
        self.repository.find_all().await
    }

    /// Deletes an expense if it exists.
    ///
    /// Deleting an unknown id is not an error.
    ///
    /// # Errors
    ///
    /// Propagates repository errors unchanged.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        if self.repository.delete_by_id(id).await? {
            tracing::debug!(id, "Expense deleted");
        } else {
            tracing::debug!(id, "Delete requested for unknown expense");
        }

        Ok(())
    }

    /// Returns `true` when the underlying storage is reachable.
    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }
}
