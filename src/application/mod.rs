//! Application layer services.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::expense_service::ExpenseService`] - Expense save, listing and deletion

pub mod services;
