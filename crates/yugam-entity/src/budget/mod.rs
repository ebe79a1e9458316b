//! Budget domain entities.

pub mod model;

pub use model::{Budget, CategoryRef, CreateBudgetRequest, UpdateBudgetRequest};
