use chrono::{Duration, NaiveDate};

/// Generates every date from `start` to `end`, inclusive of both bounds.
/// If `start` is after `end` the resulting vector is empty.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use wlog_core::dates::get_dates_in_range;
/// let start = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
///
/// let dates = get_dates_in_range(start, end);
///
/// assert_eq!(dates.len(), 3);
/// assert_eq!(dates[0], start);
/// assert_eq!(dates[2], end);
/// ```
pub fn get_dates_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        current += Duration::days(1);
    }
    dates
}
