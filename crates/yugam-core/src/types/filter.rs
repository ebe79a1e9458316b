//! Filter parameters for in-memory list filtering.
//!
//! List pages fetch everything and narrow it down locally. The query string
//! of a list route deserializes into [`ListFilter`]; the select boxes of the
//! browser shell send empty strings for "All", which are treated as unset.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Query-string filters accepted by list pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFilter {
    /// Status equality filter (`PENDING`, `APPROVED`, ...).
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<String>,
    /// Item kind filter (`EVENT` or `WORKSHOP`).
    #[serde(default, rename = "type", deserialize_with = "empty_as_none")]
    pub item_type: Option<String>,
    /// Earliest date, inclusive.
    #[serde(default, deserialize_with = "empty_as_none_date")]
    pub date_from: Option<NaiveDate>,
    /// Latest date, inclusive through the end of the day.
    #[serde(default, deserialize_with = "empty_as_none_date")]
    pub date_to: Option<NaiveDate>,
}

impl ListFilter {
    /// Whether no filter is set.
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.item_type.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    /// The date bounds of this filter.
    pub fn date_range(&self) -> DateRange {
        DateRange {
            from: self.date_from,
            to: self.date_to,
        }
    }

    /// Whether `status` passes the status filter.
    pub fn matches_status(&self, status: &str) -> bool {
        match &self.status {
            Some(wanted) => wanted.eq_ignore_ascii_case(status),
            None => true,
        }
    }

    /// Whether an item of kind `item_type` passes the type filter.
    pub fn matches_type(&self, item_type: &str) -> bool {
        match &self.item_type {
            Some(wanted) => wanted.eq_ignore_ascii_case(item_type),
            None => true,
        }
    }
}

/// An optional, inclusive calendar-day range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    /// First day included.
    pub from: Option<NaiveDate>,
    /// Last day included.
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Whether either bound is set.
    pub fn is_bounded(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Check a timestamp against the range.
    ///
    /// An item without a timestamp fails any bounded range.
    pub fn contains(&self, at: Option<DateTime<Utc>>) -> bool {
        if !self.is_bounded() {
            return true;
        }
        let Some(at) = at else {
            return false;
        };
        if let Some(from) = self.from {
            if at < from.and_time(NaiveTime::MIN).and_utc() {
                return false;
            }
        }
        if let Some(to) = self.to {
            let end_of_day = to
                .succ_opt()
                .map(|next| next.and_time(NaiveTime::MIN).and_utc());
            if let Some(end) = end_of_day {
                if at >= end {
                    return false;
                }
            }
        }
        true
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

fn empty_as_none_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match empty_as_none(deserializer)? {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
