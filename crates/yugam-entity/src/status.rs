//! Approval status shared by events, workshops and budgets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status assigned by the remote approval workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    /// Awaiting review.
    Pending,
    /// Approved by the reviewer.
    Approved,
    /// Rejected by the reviewer.
    Rejected,
    /// Finished.
    Completed,
    /// Any status string the portal does not know about.
    #[serde(other)]
    Unknown,
}

impl ApprovalStatus {
    /// The four statuses the workflow produces.
    pub const KNOWN: [ApprovalStatus; 4] = [
        ApprovalStatus::Pending,
        ApprovalStatus::Approved,
        ApprovalStatus::Rejected,
        ApprovalStatus::Completed,
    ];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Completed => "COMPLETED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApprovalStatus {
    type Err = yugam_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApprovalStatus::KNOWN
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| yugam_core::AppError::validation(format!("Invalid status: '{s}'")))
    }
}

/// Body of an approve/reject action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalDecision {
    /// `APPROVED` or `REJECTED`.
    pub status: ApprovalStatus,
    /// Reviewer remarks.
    #[serde(default)]
    pub remarks: String,
}

impl ApprovalDecision {
    /// Build a decision, rejecting statuses other than approve/reject.
    pub fn new(status: ApprovalStatus, remarks: impl Into<String>) -> yugam_core::AppResult<Self> {
        match status {
            ApprovalStatus::Approved | ApprovalStatus::Rejected => Ok(Self {
                status,
                remarks: remarks.into(),
            }),
            other => Err(yugam_core::AppError::validation(format!(
                "Approval decision must be APPROVED or REJECTED, got {other}"
            ))),
        }
    }
}
