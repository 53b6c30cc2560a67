// Date utility functions
// Calendar-day keys are opaque "YYYY-MM-DD" strings; chrono is only used
// for grid geometry and for resolving "today".

use chrono::{Datelike, Local, NaiveDate};

/// Build the zero-padded calendar-day key for a day of a month.
/// `month` is the 0-based month index used throughout the view state.
pub fn date_key(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month + 1, day)
}

/// Prefix shared by every day key of a month (`YYYY-MM`), 0-based month.
pub fn month_prefix(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month + 1)
}

/// Parse a calendar-day key. Returns `None` for anything that is not a
/// valid `%Y-%m-%d` date.
pub fn parse_date_key(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Whether `raw` is a canonical, zero-padded calendar-day key.
pub fn is_date_key(raw: &str) -> bool {
    parse_date_key(raw)
        .map(|date| date.format("%Y-%m-%d").to_string() == raw)
        .unwrap_or(false)
}

/// Today's calendar-day key in local time.
pub fn today_key() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Format a calendar-day key as the user-facing `DD/MM/YYYY` label.
/// A key that is not `-`-separated is returned unchanged.
pub fn display_date(key: &str) -> String {
    let mut parts = key.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) => format!("{}/{}/{}", day, month, year),
        _ => key.to_string(),
    }
}

/// Number of days in a month (0-based month index), computed from the
/// distance to the first day of the following month so leap years and
/// variable month lengths fall out of the calendar itself.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap();
    let next = if month == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 2, 1)
    }
    .unwrap();

    next.signed_duration_since(first).num_days() as u32
}

/// Monday-first weekday index (0 = Monday) of the first day of a month,
/// 0-based month index.
pub fn first_weekday_offset(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .unwrap()
        .weekday()
        .num_days_from_monday()
}

/// The current (year, 0-based month) pair in local time.
pub fn current_year_month() -> (i32, u32) {
    let today = Local::now().date_naive();
    (today.year(), today.month0())
}
