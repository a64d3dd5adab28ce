//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod expense_repository;

pub use expense_repository::ExpenseRepository;

#[cfg(test)]
pub use expense_repository::MockExpenseRepository;
