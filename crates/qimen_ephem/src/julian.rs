//! Julian-day arithmetic on the naive civil timeline.
//!
//! Instants are carried as naive [`chrono`] datetimes and converted to
//! Julian days through the Unix epoch. No timezone or leap-second handling
//! happens here; callers hand in the timeline they want the sun evaluated
//! on and get the same timeline back.

use chrono::{DateTime, NaiveDateTime};

/// Julian day of the Unix epoch, 1970-01-01 00:00.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian day of the J2000.0 reference epoch, 2000-01-01 12:00.
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian day of a civil instant.
pub fn jd_from_datetime(dt: NaiveDateTime) -> f64 {
    let micros = dt.and_utc().timestamp_micros();
    UNIX_EPOCH_JD + micros as f64 / (SECONDS_PER_DAY * 1e6)
}

/// Civil instant of a Julian day; `None` far outside the representable span.
pub fn datetime_from_jd(jd: f64) -> Option<NaiveDateTime> {
    let micros = (jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1e6;
    if !micros.is_finite() || micros.abs() >= i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_micros(micros.round() as i64).map(|dt| dt.naive_utc())
}

/// Julian centuries elapsed since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}
