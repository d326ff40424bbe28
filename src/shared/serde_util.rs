//! Custom serde helpers for backend wire formats.

/// Deserializes an informational timestamp into `Option<DateTime<Utc>>`
/// without ever failing the enclosing record.
///
/// Accepts RFC 3339, a zone-less `YYYY-MM-DD[T ]HH:MM:SS[.fff]` (read as
/// UTC) or Unix millis. `null`, a missing field or anything unrecognized
/// becomes `None`.
pub mod lenient_timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        let parsed = match &raw {
            Value::String(s) => parse(s),
            Value::Number(n) => n
                .as_i64()
                .and_then(DateTime::<Utc>::from_timestamp_millis),
            _ => None,
        };
        if parsed.is_none() && !raw.is_null() {
            tracing::debug!(value = %raw, "Ignoring unrecognized timestamp");
        }
        Ok(parsed)
    }

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| naive.and_utc())
    }
}
