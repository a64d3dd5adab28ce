//! Core domain entities.
//!
//! - [`Expense`] - A stored expense record
//! - [`ExpenseDraft`] - Input for creating or replacing an expense

pub mod expense;

pub use expense::{Expense, ExpenseDraft};
