//! Calendar-day helpers shared by the stats and insights layers.
//!
//! All habit math runs on `chrono::NaiveDate` calendar days; log entries
//! carry no time-of-day component.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

/// Today's calendar day in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The `n` calendar days ending at `today`, oldest first.
pub fn last_n_days(today: NaiveDate, n: u64) -> Vec<NaiveDate> {
    if n == 0 {
        return Vec::new();
    }
    let start = today
        .checked_sub_days(Days::new(n - 1))
        .unwrap_or(NaiveDate::MIN);
    start.iter_days().take_while(|d| *d <= today).collect()
}

/// Absolute number of calendar days between two dates.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs()
}

/// Full weekday name for a date ("Monday" .. "Sunday").
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
