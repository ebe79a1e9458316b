//! Table pages shared by every role area.

pub mod scope;
pub mod service;

pub use scope::{LedgerScope, Scope};
pub use service::ListingService;

pub(crate) const EVENTS_FAILED: &str = "Failed to fetch events";
pub(crate) const WORKSHOPS_FAILED: &str = "Failed to fetch workshops";
pub(crate) const BUDGETS_FAILED: &str = "Failed to fetch budgets";
pub(crate) const EXPENSES_FAILED: &str = "Failed to fetch expenses";
pub(crate) const VENUES_FAILED: &str = "Failed to fetch venues";
pub(crate) const CATEGORIES_FAILED: &str = "Failed to fetch categories";
pub(crate) const PRODUCTS_FAILED: &str = "Failed to fetch products";
pub(crate) const USERS_FAILED: &str = "Failed to fetch users";
pub(crate) const NOTIFICATIONS_FAILED: &str = "Failed to fetch notifications";
pub(crate) const LOGS_FAILED: &str = "Failed to fetch logs";
