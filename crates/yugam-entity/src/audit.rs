//! Audit log entries shown on the admin logs page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One audit log record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub id: String,
    pub action: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "crate::timestamp::lenient")]
    pub created_at: Option<DateTime<Utc>>,
}
