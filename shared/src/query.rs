//! Report parameter validation
//!
//! Used by the server to reject bad requests and by the client to fail
//! fast before a request is sent. Error messages are part of the API
//! contract and must not change.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc};
use thiserror::Error;

/// Parameter validation failure (always a 400 on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("year is required")]
    YearRequired,

    #[error("year must be a valid number")]
    YearNotNumber,

    #[error("Month and year are required")]
    MonthAndYearRequired,

    #[error("Month must be a number between 1 and 12")]
    MonthOutOfRange,

    #[error("Year must be a valid number")]
    MonthlyYearNotNumber,

    #[error("Start date and end date are required")]
    DateRangeRequired,

    #[error("Start date and end date must be valid dates")]
    DateRangeInvalid,
}

/// Treats an empty query value the same as a missing one
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Validate the `year` parameter of the sales-by-year report
pub fn parse_year(year: Option<&str>) -> Result<i32, QueryError> {
    let year = present(year).ok_or(QueryError::YearRequired)?;
    year.parse().map_err(|_| QueryError::YearNotNumber)
}

/// Half-open date range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl MonthRange {
    /// Validate `month`/`year` and compute the calendar month in UTC
    ///
    /// Presence is checked before the month range, so `month=13` without a
    /// year still reports the missing parameter.
    pub fn parse(month: Option<&str>, year: Option<&str>) -> Result<Self, QueryError> {
        let (Some(month), Some(year)) = (present(month), present(year)) else {
            return Err(QueryError::MonthAndYearRequired);
        };

        let month: u32 = month.parse().map_err(|_| QueryError::MonthOutOfRange)?;
        if !(1..=12).contains(&month) {
            return Err(QueryError::MonthOutOfRange);
        }
        let year: i32 = year.parse().map_err(|_| QueryError::MonthlyYearNotNumber)?;

        Self::for_month(year, month).ok_or(QueryError::MonthlyYearNotNumber)
    }

    /// Calendar month range; `None` if the year is outside chrono's range
    pub fn for_month(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some(Self {
            start: Utc.from_utc_datetime(&first.and_time(NaiveTime::MIN)),
            end: Utc.from_utc_datetime(&next.and_time(NaiveTime::MIN)),
        })
    }

    pub fn contains(&self, at: &DateTime<Utc>) -> bool {
        self.start <= *at && *at < self.end
    }
}

/// Inclusive date range `[start, end]` for the call duration report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Parse `startDate`/`endDate`
    ///
    /// Plain dates (`2024-01-31`) cover the whole day: the start is
    /// midnight, the end is the last millisecond of that day.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, QueryError> {
        let (Some(start), Some(end)) = (present(start), present(end)) else {
            return Err(QueryError::DateRangeRequired);
        };
        let start = parse_instant(start, false).ok_or(QueryError::DateRangeInvalid)?;
        let end = parse_instant(end, true).ok_or(QueryError::DateRangeInvalid)?;
        Ok(Self { start, end })
    }

    pub fn contains(&self, at: &DateTime<Utc>) -> bool {
        self.start <= *at && *at <= self.end
    }
}

fn parse_instant(value: &str, end_of_day: bool) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let time = if end_of_day {
        NaiveTime::from_hms_milli_opt(23, 59, 59, 999)?
    } else {
        NaiveTime::MIN
    };
    Some(Utc.from_utc_datetime(&date.and_time(time)))
}

/// Parse an agent id path segment the way the web client's `parseInt` reads it
///
/// Leading whitespace and a sign are allowed, then the longest run of digits
/// wins and the rest is ignored (`"1002abc"` is 1002). A `0x` prefix reads
/// hex digits. No leading digits means no agent.
pub fn parse_agent_id(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, s) = match s.get(..2) {
        Some("0x" | "0X") => (16, &s[2..]),
        _ => (10, s),
    };
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map_or(s.len(), |(i, _)| i);
    let value = i64::from_str_radix(&s[..end], radix).ok()?;
    Some(if negative { -value } else { value })
}

/// Year of a timestamp, as the database's `$year` operator reports it (UTC)
pub fn utc_year(at: &DateTime<Utc>) -> i32 {
    at.year()
}
