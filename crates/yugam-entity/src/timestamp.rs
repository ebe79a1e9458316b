//! Timestamp decoding for remote records.
//!
//! The remote API echoes `dateTime` back exactly as it was submitted, so a
//! record may carry RFC 3339, a naive `YYYY-MM-DDTHH:MM[:SS[.fff]]` local
//! stamp, or a bare date. Naive values are read as UTC. Anything else is
//! logged and dropped so one bad row never fails the whole list.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a remote timestamp string, or `None` when no known format fits.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// `deserialize_with` target for optional timestamp fields.
pub(crate) fn lenient<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(raw)) if raw.trim().is_empty() => None,
        Some(serde_json::Value::String(raw)) => {
            let parsed = parse_timestamp(&raw);
            if parsed.is_none() {
                tracing::warn!(value = %raw, "Ignoring unparseable timestamp");
            }
            parsed
        }
        Some(other) => {
            tracing::warn!(value = %other, "Ignoring non-string timestamp");
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_accepts_rfc3339_and_naive_forms() {
        let expected = Utc.with_ymd_and_hms(2024, 12, 25, 10, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-12-25T10:00:00.000Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-12-25T15:30:00+05:30"), Some(expected));
        assert_eq!(parse_timestamp("2024-12-25T10:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-12-25T10:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-12-25 10:00:00"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-12-25"),
            Some(Utc.with_ymd_and_hms(2024, 12, 25, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_timestamp("next tuesday"), None);
        assert_eq!(parse_timestamp("2024-13-45T10:00"), None);
    }
}
