//! Building blocks shared by page view models.

pub mod badge;
pub mod csv;
pub mod filter;
pub mod row;
pub mod summary;
pub mod toast;

pub use badge::StatusBadge;
pub use csv::CsvDownload;
pub use row::{BudgetRow, ItemRow};
pub use summary::{BudgetSummary, UtilizationTier};
pub use toast::{Toast, ToastKind, Toasts};

use serde::Serialize;

use yugam_core::types::ListFilter;

/// A table page: rows plus whatever went wrong while fetching them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView<T> {
    pub rows: Vec<T>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ListFilter>,
    pub toasts: Vec<Toast>,
}

impl<T> ListView<T> {
    pub fn new(rows: Vec<T>, toasts: Toasts) -> Self {
        Self {
            total: rows.len(),
            rows,
            filter: None,
            toasts: toasts.into_vec(),
        }
    }

    /// Echo the applied filter back so the shell can keep its inputs.
    pub fn with_filter(mut self, filter: ListFilter) -> Self {
        self.filter = Some(filter);
        self
    }
}
