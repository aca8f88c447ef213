//! Resolves user-supplied date tokens into concrete days or inclusive ranges.
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

use crate::keywords::{Keyword, Keywords};

/// Default accepted input date formats, tried in order.
const DEFAULT_FORMATS: &[&str] = &["%m-%d-%Y", "%Y-%m-%d"];

/// The result of parsing a date token, which can be a single day or a range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DateFilter {
    Single(NaiveDate),
    Range(NaiveDate, NaiveDate),
}

impl DateFilter {
    fn first_day(&self) -> NaiveDate {
        match *self {
            DateFilter::Single(d) => d,
            DateFilter::Range(start, _) => start,
        }
    }

    fn last_day(&self) -> NaiveDate {
        match *self {
            DateFilter::Single(d) => d,
            DateFilter::Range(_, end) => end,
        }
    }
}

/// Configuration options for the date-token parser.
#[derive(Copy, Clone, Debug, Default)]
pub struct ParseOptions<'a> {
    /// The date to use as "today" for relative keywords.
    pub reference_date: Option<NaiveDate>,
    /// A slice of `chrono` format strings to try for formatted dates.
    pub formats: Option<&'a [&'a str]>,
}

/// Parses one or two date tokens into a [`DateFilter`].
///
/// A token is resolved in the following order:
/// 1. **Relative keywords**: `today`, `yesterday`, a weekday name (the most
///    recent such weekday, today included), `last week`, `this week`,
///    `last month`, `this month`, plus any user-defined synonyms
///    (case-insensitive).
/// 2. **Formatted dates**: any format string in `formats`, `%m-%d-%Y` and
///    `%Y-%m-%d` by default.
///
/// When `end` is given, the two tokens are combined into an inclusive range
/// from the earliest day of `start` to the latest day of `end`.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use wlog_core::parse_date::{parse_date_token, DateFilter, ParseOptions};
/// let opts = ParseOptions {
///     reference_date: Some(NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()),
///     ..Default::default()
/// };
///
/// let yesterday = parse_date_token("yesterday", None, Some(opts)).unwrap();
/// assert_eq!(yesterday, DateFilter::Single(NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()));
///
/// let range = parse_date_token("08-03-2026", Some("today"), Some(opts)).unwrap();
/// assert_eq!(
///     range,
///     DateFilter::Range(
///         NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
///         NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
///     )
/// );
/// ```
pub fn parse_date_token(
    start: &str,
    end: Option<&str>,
    options: Option<ParseOptions>,
) -> Option<DateFilter> {
    let options = options.unwrap_or_default();
    let reference_date = options
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());
    let formats = options.formats.unwrap_or(DEFAULT_FORMATS);

    let start = resolve_token(start.trim(), reference_date, formats)?;
    match end {
        Some(end) => {
            let end = resolve_token(end.trim(), reference_date, formats)?;
            Some(DateFilter::Range(start.first_day(), end.last_day()))
        }
        None => Some(start),
    }
}

fn resolve_token(s: &str, reference_date: NaiveDate, formats: &[&str]) -> Option<DateFilter> {
    if Keywords::matches(Keyword::Today, s) {
        return Some(DateFilter::Single(reference_date));
    }
    if Keywords::matches(Keyword::Yesterday, s) {
        return Some(DateFilter::Single(reference_date - Duration::days(1)));
    }
    if Keywords::matches(Keyword::ThisWeek, s) {
        let monday = start_of_week(reference_date);
        return Some(DateFilter::Range(monday, reference_date));
    }
    if Keywords::matches(Keyword::LastWeek, s) {
        let monday = start_of_week(reference_date) - Duration::days(7);
        return Some(DateFilter::Range(monday, monday + Duration::days(6)));
    }
    if Keywords::matches(Keyword::ThisMonth, s) {
        let first = reference_date.with_day(1)?;
        return Some(DateFilter::Range(first, reference_date));
    }
    if Keywords::matches(Keyword::LastMonth, s) {
        let first_of_this_month = reference_date.with_day(1)?;
        let end_of_last_month = first_of_this_month - Duration::days(1);
        let start_of_last_month = end_of_last_month.with_day(1)?;
        return Some(DateFilter::Range(start_of_last_month, end_of_last_month));
    }

    let day_keyword = [
        (Keyword::Monday, Weekday::Mon),
        (Keyword::Tuesday, Weekday::Tue),
        (Keyword::Wednesday, Weekday::Wed),
        (Keyword::Thursday, Weekday::Thu),
        (Keyword::Friday, Weekday::Fri),
        (Keyword::Saturday, Weekday::Sat),
        (Keyword::Sunday, Weekday::Sun),
    ]
    .iter()
    .find(|(keyword, _)| Keywords::matches(*keyword, s));

    if let Some((_, weekday)) = day_keyword {
        let today_wd = reference_date.weekday();
        let days_ago = (today_wd.num_days_from_monday() + 7 - weekday.num_days_from_monday()) % 7;
        return Some(DateFilter::Single(
            reference_date - Duration::days(days_ago as i64),
        ));
    }

    // Fallback to formatted dates
    formats
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .map(DateFilter::Single)
        .next()
}

fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // Thursday
    const ANCHOR: (i32, u32, u32) = (2026, 8, 6);

    fn anchor() -> NaiveDate {
        let (y, m, d) = ANCHOR;
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn opts() -> Option<ParseOptions<'static>> {
        Some(ParseOptions {
            reference_date: Some(anchor()),
            ..Default::default()
        })
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn today_and_yesterday_resolve_relative_to_reference() {
        assert_eq!(
            parse_date_token("today", None, opts()),
            Some(DateFilter::Single(anchor()))
        );
        assert_eq!(
            parse_date_token("Yesterday", None, opts()),
            Some(DateFilter::Single(date(2026, 8, 5)))
        );
    }

    #[test]
    fn weekday_resolves_to_most_recent_occurrence() {
        // The anchor is a Thursday; "thursday" is the anchor itself.
        assert_eq!(
            parse_date_token("thursday", None, opts()),
            Some(DateFilter::Single(anchor()))
        );
        // Friday was six days before the anchor.
        assert_eq!(
            parse_date_token("friday", None, opts()),
            Some(DateFilter::Single(date(2026, 7, 31)))
        );
    }

    #[test]
    fn week_keywords_resolve_to_ranges() {
        assert_eq!(
            parse_date_token("this week", None, opts()),
            Some(DateFilter::Range(date(2026, 8, 3), anchor()))
        );
        assert_eq!(
            parse_date_token("last week", None, opts()),
            Some(DateFilter::Range(date(2026, 7, 27), date(2026, 8, 2)))
        );
    }

    #[test]
    fn month_keywords_resolve_to_ranges() {
        assert_eq!(
            parse_date_token("this month", None, opts()),
            Some(DateFilter::Range(date(2026, 8, 1), anchor()))
        );
        assert_eq!(
            parse_date_token("last month", None, opts()),
            Some(DateFilter::Range(date(2026, 7, 1), date(2026, 7, 31)))
        );
    }

    #[test]
    fn formatted_dates_use_the_given_formats() {
        assert_eq!(
            parse_date_token("08-03-2026", None, opts()),
            Some(DateFilter::Single(date(2026, 8, 3)))
        );
        assert_eq!(
            parse_date_token("2026-08-03", None, opts()),
            Some(DateFilter::Single(date(2026, 8, 3)))
        );
        let custom = ParseOptions {
            reference_date: Some(anchor()),
            formats: Some(&["%d/%m/%Y"]),
        };
        assert_eq!(
            parse_date_token("03/08/2026", None, Some(custom)),
            Some(DateFilter::Single(date(2026, 8, 3)))
        );
        assert_eq!(parse_date_token("08-03-2026", None, Some(custom)), None);
    }

    #[test]
    fn start_and_end_tokens_combine_into_a_range() {
        assert_eq!(
            parse_date_token("monday", Some("today"), opts()),
            Some(DateFilter::Range(date(2026, 8, 3), anchor()))
        );
        // A range-valued start keeps its earliest day as the lower bound.
        assert_eq!(
            parse_date_token("last week", Some("yesterday"), opts()),
            Some(DateFilter::Range(date(2026, 7, 27), date(2026, 8, 5)))
        );
    }

    #[test]
    fn unknown_token_resolves_to_none() {
        assert_eq!(parse_date_token("not-a-date", None, opts()), None);
        assert_eq!(parse_date_token("today", Some("not-a-date"), opts()), None);
    }
}
