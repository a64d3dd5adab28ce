//! Expense entity representing one tracked spending entry.

use chrono::NaiveDate;

/// A persisted expense.
///
/// The identifier is assigned by the repository on first save and only changes
/// when an update explicitly targets another id.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub payment_method: String,
}

impl Expense {
    /// Creates a new Expense instance.
    pub fn new(
        id: i64,
        title: String,
        category: String,
        amount: f64,
        date: NaiveDate,
        payment_method: String,
    ) -> Self {
        Self {
            id,
            title,
            category,
            amount,
            date,
            payment_method,
        }
    }
}

/// Input for the repository upsert.
///
/// `id: None` asks the repository to assign a fresh identifier,
/// `id: Some(n)` creates or fully replaces the record `n`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub id: Option<i64>,
    pub title: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub payment_method: String,
}

impl ExpenseDraft {
    /// Overwrites whatever identifier the draft carried.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Materializes the draft as a stored expense under `id`.
    pub fn into_expense(self, id: i64) -> Expense {
        Expense {
            id,
            title: self.title,
            category: self.category,
            amount: self.amount,
            date: self.date,
            payment_method: self.payment_method,
        }
    }
}
