//! Shared view of events and workshops.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::ApprovalStatus;
use crate::user::UserRef;

/// Which kind of program item a record is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    /// A one-off event.
    Event,
    /// A workshop.
    Workshop,
}

impl ItemKind {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "EVENT",
            Self::Workshop => "WORKSHOP",
        }
    }

    /// Path segment of the item's detail page.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Event => "events",
            Self::Workshop => "workshops",
        }
    }
}

/// Read access common to events and workshops, so list pages and filters
/// can treat both uniformly.
pub trait ProgramItem {
    /// Kind of this item.
    fn kind(&self) -> ItemKind;
    /// Remote identifier.
    fn id(&self) -> &str;
    /// Title shown in tables.
    fn title(&self) -> &str;
    /// Free-text description, if any.
    fn description(&self) -> Option<&str>;
    /// Approval status.
    fn status(&self) -> ApprovalStatus;
    /// Scheduled start, if set.
    fn date_time(&self) -> Option<DateTime<Utc>>;
    /// Venue name, if set.
    fn venue(&self) -> Option<&str>;
    /// The team lead who created it.
    fn creator(&self) -> &UserRef;
    /// The assigned coordinator, if any.
    fn coordinator(&self) -> Option<&UserRef>;

    /// Whether `user_id` is this item's coordinator.
    fn is_coordinated_by(&self, user_id: &str) -> bool {
        self.coordinator().is_some_and(|c| c.id == user_id)
    }

    /// Whether `user_id` created this item.
    fn is_created_by(&self, user_id: &str) -> bool {
        self.creator().id == user_id
    }
}
