//! Business logic services for the application layer.

pub mod expense_service;

pub use expense_service::ExpenseService;
