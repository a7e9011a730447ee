// third-party imports
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use humantime::parse_duration;

// local imports
use crate::error::*;

/// Parses a moment given on the command line.
///
/// Accepted forms, tried in order:
/// - `-<duration>` or `+<duration>` relative to `now`, e.g. `-90s`, `-2h 5m`, `+1day`
/// - RFC 3339, e.g. `2024-06-15T12:00:00+02:00`
/// - weak RFC 3339 in UTC, e.g. `2024-06-15 12:00:00`
/// - a plain date taken as UTC midnight, e.g. `2024-06-15`
pub fn parse_time(s: &str, now: &DateTime<Utc>) -> Result<DateTime<Utc>> {
    let s = s.trim();
    None.or_else(|| relative_past(s, now))
        .or_else(|| relative_future(s, now))
        .or_else(|| rfc3339(s))
        .or_else(|| rfc3339_weak(s))
        .or_else(|| date(s))
        .ok_or(Error::UnrecognizedTime(s.into()))
}

fn relative_past(s: &str, now: &DateTime<Utc>) -> Option<DateTime<Utc>> {
    let d = parse_duration(s.strip_prefix('-')?).ok()?;
    now.checked_sub_signed(TimeDelta::from_std(d).ok()?)
}

fn relative_future(s: &str, now: &DateTime<Utc>) -> Option<DateTime<Utc>> {
    let d = parse_duration(s.strip_prefix('+')?).ok()?;
    now.checked_add_signed(TimeDelta::from_std(d).ok()?)
}

fn rfc3339(s: &str) -> Option<DateTime<Utc>> {
    Some(DateTime::parse_from_rfc3339(s).ok()?.with_timezone(&Utc))
}

fn rfc3339_weak(s: &str) -> Option<DateTime<Utc>> {
    Some(humantime::parse_rfc3339_weak(s).ok()?.into())
}

fn date(s: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}
