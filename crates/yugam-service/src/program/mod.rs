//! Actions on events, workshops and budgets: create and approve.

pub mod service;

pub use service::{ApprovalTarget, CreateFormView, ProgramService};
