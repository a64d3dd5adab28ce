use std::sync::Arc;

use crate::application::services::ExpenseService;

/// Shared handles injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub expense_service: Arc<ExpenseService>,
}

impl AppState {
    pub fn new(expense_service: Arc<ExpenseService>) -> Self {
        Self { expense_service }
    }
}
