use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Round `value` to `places` decimal places, half away from zero. NaN and infinities pass through.
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Length of the interval `[start, end]` in fractional hours, millisecond resolution.
pub fn hours_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / MILLIS_PER_HOUR
}

/// ISO-8601 UTC with millisecond precision, e.g. `2024-01-01T10:00:00.000Z`.
pub fn iso_millis(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn serialize_iso_millis<S: Serializer>(
    instant: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&iso_millis(instant))
}
