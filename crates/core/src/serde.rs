//! Serde helpers for wire-format timestamps.
//!
//! Book timestamps travel as ISO 8601 strings with millisecond precision and a
//! `Z` suffix (`YYYY-MM-DDTHH:mm:ss.sssZ`). Deserialization accepts any RFC 3339
//! offset and normalizes it to UTC.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Format a UTC timestamp as `YYYY-MM-DDTHH:mm:ss.sssZ`.
pub fn format_iso8601(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an RFC 3339 timestamp into UTC.
pub fn parse_iso8601(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}

/// Serialize a `DateTime<Utc>` with millisecond precision.
pub fn serialize_iso8601<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_iso8601(dt))
}

/// Deserialize an RFC 3339 string into a `DateTime<Utc>`.
pub fn deserialize_iso8601<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_iso8601(&s).map_err(serde::de::Error::custom)
}
