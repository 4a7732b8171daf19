//! # Temporal Types
//!
//! UTC-only timestamp type. Every timestamp that crosses the API boundary
//! (envelope stamps, payload dates) is UTC and serializes as ISO 8601 with
//! microsecond precision and a `Z` suffix, e.g. `2026-01-15T12:00:00.000000Z`.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A UTC timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp representing the current UTC time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Shift by a whole number of days (negative values move into the past).
    pub fn offset_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// ISO 8601 rendering with microseconds and `Z` suffix.
    pub fn to_iso_string(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Micros, true)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap())
    }

    #[test]
    fn iso_string_is_utc_with_z_suffix() {
        assert_eq!(fixed().to_iso_string(), "2026-01-15T12:00:00.000000Z");
    }

    #[test]
    fn offset_days_moves_both_directions() {
        let ts = fixed();
        assert_eq!(
            ts.offset_days(30).to_iso_string(),
            "2026-02-14T12:00:00.000000Z"
        );
        assert_eq!(
            ts.offset_days(-15).to_iso_string(),
            "2025-12-31T12:00:00.000000Z"
        );
    }

    #[test]
    fn serde_roundtrip_preserves_instant() {
        let ts = fixed();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2026-01-15T12:00:00.000000Z\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn deserialize_rejects_garbage() {
        assert!(serde_json::from_str::<Timestamp>("\"yesterday\"").is_err());
    }
}
