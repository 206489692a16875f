use chrono::{NaiveTime, TimeDelta};

use crate::pricing::constants::TIME_SLOT_MINUTES;

/// Parse a 24-hour `HH:MM` clock time.
pub fn parse_clock_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}

/// Elapsed hours between two `HH:MM` clock times.
///
/// Missing or unparseable input yields 0. An end at or before the start rolls
/// over to the next day, so equal times mean a 24-hour event.
pub fn compute_hours(start: &str, end: &str) -> f64 {
    let (Some(start), Some(end)) = (parse_clock_time(start), parse_clock_time(end)) else {
        return 0.0;
    };

    let mut elapsed = end.signed_duration_since(start);
    // Ends after midnight (or equal times)
    if elapsed <= TimeDelta::zero() {
        elapsed += TimeDelta::days(1);
    }

    (elapsed.num_minutes() as f64 / 60.0).max(0.0)
}

/// All selectable start/end times of a day, `00:00` through `23:30`.
pub fn time_slots() -> Vec<String> {
    (0..24 * 60)
        .step_by(TIME_SLOT_MINUTES as usize)
        .map(|m| format!("{:02}:{:02}", m / 60, m % 60))
        .collect()
}
