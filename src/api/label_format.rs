use chrono::{DateTime, Utc};

fn to_datetime(timestamp_ms: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
}

/// X-axis label, e.g. `Mar 7`.
#[must_use]
pub fn format_short_date(timestamp_ms: i64) -> String {
    to_datetime(timestamp_ms).map_or_else(
        || timestamp_ms.to_string(),
        |time| time.format("%b %-d").to_string(),
    )
}

/// Tooltip title, e.g. `Sat, Mar 7`.
#[must_use]
pub fn format_long_date(timestamp_ms: i64) -> String {
    to_datetime(timestamp_ms).map_or_else(
        || timestamp_ms.to_string(),
        |time| time.format("%a, %b %-d").to_string(),
    )
}

/// Y gridline label: values round up to whole numbers.
#[must_use]
pub fn format_axis_value(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let rounded = value.ceil();
    // Avoid "-0".
    if rounded == 0.0 {
        "0".to_owned()
    } else {
        format!("{rounded:.0}")
    }
}

/// Tooltip value: integers without a fraction, everything else as-is.
#[must_use]
pub fn format_tooltip_value(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0".
        return "0".to_owned();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
