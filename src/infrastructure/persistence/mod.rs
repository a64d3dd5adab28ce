//! Expense repository implementations.
//!
//! # Repositories
//!
//! - [`PgExpenseRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryExpenseRepository`] - Process-local storage for development and tests

pub mod memory_expense_repository;
pub mod pg_expense_repository;

pub use memory_expense_repository::InMemoryExpenseRepository;
pub use pg_expense_repository::PgExpenseRepository;
