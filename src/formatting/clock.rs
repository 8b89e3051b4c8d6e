use chrono::{DateTime, Local, Utc};

/// Renders an absolute instant as local wall-clock time, `HH:MM:SS.mmm`.
/// Pure and total; the millisecond field is always in [0,999].
pub fn format_clock(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%H:%M:%S%.3f")
        .to_string()
}
