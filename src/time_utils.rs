use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Interpret a naive producer timestamp as UTC.
///
/// Precondition: `naive` was written by a producer running in UTC. No zone
/// is inferred from the host or browser; the value is pinned to UTC as-is.
pub fn naive_as_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    naive.and_utc()
}

/// Parse `ultima_actualizacion`.
///
/// A timestamp with an explicit offset (RFC 3339) keeps it; one without is
/// taken as UTC through [`naive_as_utc`]. Returns `None` when the text is
/// neither.
pub fn parse_snapshot_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(naive_as_utc)
}

/// Convert an instant already pinned to UTC into the display zone.
pub fn to_display_zone(instant: DateTime<Utc>, zone: Tz) -> DateTime<Tz> {
    instant.with_timezone(&zone)
}

/// Label for the header: `YYYY-MM-DD HH:MM TZ` in the display zone, the raw
/// text when it cannot be parsed, or `None` when the producer wrote nothing.
pub fn format_last_updated(raw: Option<&str>, zone: Tz) -> Option<String> {
    let raw = raw?;
    Some(match parse_snapshot_timestamp(raw) {
        Some(instant) => to_display_zone(instant, zone).format("%Y-%m-%d %H:%M %Z").to_string(),
        None => raw.to_string(),
    })
}
