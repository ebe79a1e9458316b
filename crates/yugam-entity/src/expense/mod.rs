//! Expense domain entities.

pub mod model;

pub use model::{CreateExpenseRequest, Expense, UpdateExpenseRequest};
