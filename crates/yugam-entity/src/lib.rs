//! # yugam-entity
//!
//! Plain records mirrored from the remote Yugam API. The portal owns no
//! invariants over them beyond optional-field presence; they are fetched,
//! displayed, and occasionally submitted back.

pub mod audit;
pub mod budget;
pub mod catalog;
pub mod event;
pub mod expense;
pub mod item;
pub mod notification;
pub mod status;
pub mod timestamp;
pub mod user;
pub mod workshop;

pub use audit::AuditLogEntry;
pub use budget::{Budget, CategoryRef};
pub use catalog::{Category, Product, Venue};
pub use event::Event;
pub use expense::Expense;
pub use item::{ItemKind, ProgramItem};
pub use notification::Notification;
pub use status::{ApprovalDecision, ApprovalStatus};
pub use user::{Role, User, UserRef};
pub use workshop::Workshop;
