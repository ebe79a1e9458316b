//! Status-to-badge lookup.

use serde::Serialize;

use yugam_core::{AppError, AppResult};
use yugam_entity::ApprovalStatus;

/// Tailwind classes and label for a status pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub background: &'static str,
    pub text: &'static str,
    pub label: &'static str,
}

impl StatusBadge {
    /// Shown for statuses the lookup does not know.
    pub const NEUTRAL: StatusBadge = StatusBadge {
        background: "bg-gray-100",
        text: "text-gray-800",
        label: "Unknown",
    };

    /// Badge for one of the four workflow statuses. Anything else is an
    /// error.
    pub fn lookup(status: ApprovalStatus) -> AppResult<Self> {
        let (background, text, label) = match status {
            ApprovalStatus::Pending => ("bg-yellow-100", "text-yellow-800", "Pending"),
            ApprovalStatus::Approved => ("bg-green-100", "text-green-800", "Approved"),
            ApprovalStatus::Rejected => ("bg-red-100", "text-red-800", "Rejected"),
            ApprovalStatus::Completed => ("bg-blue-100", "text-blue-800", "Completed"),
            ApprovalStatus::Unknown => {
                return Err(AppError::validation(format!(
                    "No badge for status {status}"
                )));
            }
        };
        Ok(Self {
            background,
            text,
            label,
        })
    }

    /// Badge for a table row; falls back to [`StatusBadge::NEUTRAL`].
    pub fn for_row(status: ApprovalStatus, id: &str) -> Self {
        Self::lookup(status).unwrap_or_else(|_| {
            tracing::warn!(id = %id, "Row has an unrecognized status");
            Self::NEUTRAL
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_total_over_known_statuses() {
        for status in ApprovalStatus::KNOWN {
            assert!(StatusBadge::lookup(status).is_ok(), "{status}");
        }
        let approved = StatusBadge::lookup(ApprovalStatus::Approved).unwrap();
        assert_eq!(approved.background, "bg-green-100");
        assert_eq!(approved.text, "text-green-800");
        assert_eq!(approved.label, "Approved");
    }

    #[test]
    fn test_unknown_status_is_lookup_failure() {
        assert!(StatusBadge::lookup(ApprovalStatus::Unknown).is_err());
        assert_eq!(
            StatusBadge::for_row(ApprovalStatus::Unknown, "e-1"),
            StatusBadge::NEUTRAL
        );
    }
}
