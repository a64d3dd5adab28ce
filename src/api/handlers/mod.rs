//! HTTP request handlers for API endpoints.

pub mod expenses;
pub mod health;
pub mod info;

pub use expenses::{
    create_expense_handler, delete_expense_handler, list_expenses_handler, update_expense_handler,
};
pub use health::health_handler;
pub use info::{home_handler, info_handler};
