//! # yugam-service
//!
//! Page services for the Yugam Finance Portal. Every page follows the same
//! pattern: fetch through the typed wrappers (independent fetches joined
//! concurrently), narrow the results in memory, map statuses to badges and
//! compute aggregates. A failed fetch never fails the page; it leaves that
//! list empty and adds an error toast.
//!
//! Services hold a [`PortalClient`](yugam_client::PortalClient) and take a
//! [`RequestContext`] per call so remote requests carry the user's token.

pub mod context;
pub mod coordinator;
pub mod detail;
pub mod listing;
pub mod profile;
pub mod program;
pub mod report;
pub mod view;

pub use context::RequestContext;
pub use coordinator::CoordinatorService;
pub use detail::DetailService;
pub use listing::{LedgerScope, ListingService, Scope};
pub use profile::ProfileService;
pub use program::ProgramService;
pub use report::{DashboardService, ReportService};
