//! In-memory predicate chain over events and workshops.

use yugam_core::types::ListFilter;
use yugam_entity::ProgramItem;

/// Whether `item` passes the status, type and date filters.
pub fn matches<T: ProgramItem>(item: &T, filter: &ListFilter) -> bool {
    filter.matches_status(item.status().as_str())
        && filter.matches_type(item.kind().as_str())
        && filter.date_range().contains(item.date_time())
}

/// Keep the items that pass `filter`, preserving order.
pub fn apply<T: ProgramItem>(items: Vec<T>, filter: &ListFilter) -> Vec<T> {
    if filter.is_empty() {
        return items;
    }
    items.into_iter().filter(|item| matches(item, filter)).collect()
}
