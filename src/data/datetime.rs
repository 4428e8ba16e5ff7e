use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Unix timestamp (seconds) of midnight UTC on `date`. Used as the plot x coordinate.
pub fn date_to_timestamp(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp() as f64
}

/// Inverse of [`date_to_timestamp`], rounding to the nearest day.
pub fn timestamp_to_date(ts: f64) -> Option<NaiveDate> {
    if !ts.is_finite() {
        return None;
    }
    let days = (ts / SECONDS_PER_DAY).round();
    let secs = days * SECONDS_PER_DAY;
    if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
        return None;
    }
    DateTime::<Utc>::from_timestamp(secs as i64, 0).map(|dt| dt.date_naive())
}

/// Format a plot x coordinate as a calendar date for axis ticks and hover labels.
pub fn format_axis_date(ts: f64) -> String {
    match timestamp_to_date(ts) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}
