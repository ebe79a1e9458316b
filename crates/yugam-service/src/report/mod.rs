//! Financial reports and role dashboards.

pub mod dashboard;
pub mod financial;
pub mod snapshot;

pub use dashboard::{DashboardService, DashboardView};
pub use financial::{ItemReport, ReportService, ReportView};
pub use snapshot::{Needs, Snapshot, StatusCounts};
