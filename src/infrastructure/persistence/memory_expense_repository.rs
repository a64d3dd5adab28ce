//! Process-local expense repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Expense, ExpenseDraft};
use crate::domain::repositories::ExpenseRepository;
use crate::error::AppError;

/// An expense repository that keeps everything in memory.
///
/// Used when `STORAGE=memory` and by handler tests. Contents are lost when the
/// process exits.
pub struct InMemoryExpenseRepository {
    store: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    expenses: BTreeMap<i64, Expense>,
    /// Highest id ever handed out or explicitly saved. Never decreases.
    last_id: i64,
}

impl InMemoryExpenseRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        debug!("Using in-memory expense storage");
        Self {
            store: RwLock::new(Store::default()),
        }
    }
}

impl Default for InMemoryExpenseRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExpenseRepository for InMemoryExpenseRepository {
    async fn save(&self, draft: ExpenseDraft) -> Result<Expense, AppError> {
        let mut store = self.store.write().await;

        let id = match draft.id {
            Some(id) => id,
            None => store.last_id.checked_add(1).ok_or_else(|| {
                AppError::internal("Expense id space exhausted", json!({}))
            })?,
        };
        store.last_id = store.last_id.max(id);

        let expense = draft.into_expense(id);
        store.expenses.insert(id, expense.clone());

        Ok(expense)
    }

    async fn find_all(&self) -> Result<Vec<Expense>, AppError> {
        let store = self.store.read().await;
        Ok(store.expenses.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let mut store = self.store.write().await;
        Ok(store.expenses.remove(&id).is_some())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
