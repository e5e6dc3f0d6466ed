//! Daily reset timing
//!
//! A new daily word becomes available at midnight UTC.

use chrono::{DateTime, Days, NaiveTime, TimeDelta, Utc};

/// The next midnight UTC strictly after `now`
#[must_use]
pub fn next_daily_reset(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive()
        .checked_add_days(Days::new(1))
        .map_or(DateTime::<Utc>::MAX_UTC, |tomorrow| {
            tomorrow.and_time(NaiveTime::MIN).and_utc()
        })
}

/// Human-readable time until the next daily word, e.g. "5h 23m"
#[must_use]
pub fn time_until_next_daily(now: DateTime<Utc>) -> String {
    format_countdown(next_daily_reset(now) - now)
}

/// Format a countdown using its two most significant units
///
/// Hours and minutes above one hour, minutes and seconds above one minute,
/// seconds alone otherwise. Negative spans format as "0s".
#[must_use]
pub fn format_countdown(delta: TimeDelta) -> String {
    let total = delta.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}
