//! Humanized elapsed time, e.g. `"8 minutes ago"` or `"1 month ago, 2 weeks"`.

// std imports
use std::fmt::Write;

// third-party imports
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use serde::Deserialize;

// ---

const JUST_NOW: &str = "Just Now";
const WEEKS_PER_MONTH: f64 = 4.34812;

/// Formats the time elapsed between `past` and `now` with the default options.
pub fn to_relative<Tz1, Tz2>(past: &DateTime<Tz1>, now: &DateTime<Tz2>) -> String
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    RelativeFormat::default().between(past, now)
}

/// Formats the time elapsed since `past` using the current time.
pub fn to_relative_now<Tz: TimeZone>(past: &DateTime<Tz>) -> String {
    to_relative(past, &Utc::now())
}

// ---

/// Options of relative time formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RelativeFormat {
    /// Keeps the `"<N> minutes ago"` wording even for a single minute.
    pub always_plural_minutes: bool,
}

impl RelativeFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_always_plural_minutes(self, always_plural_minutes: bool) -> Self {
        Self {
            always_plural_minutes,
            ..self
        }
    }

    /// Formats the time elapsed between `past` and `now`.
    pub fn between<Tz1, Tz2>(&self, past: &DateTime<Tz1>, now: &DateTime<Tz2>) -> String
    where
        Tz1: TimeZone,
        Tz2: TimeZone,
    {
        self.format(now.with_timezone(&Utc) - past.with_timezone(&Utc))
    }

    /// Formats an elapsed duration.
    ///
    /// The coarsest unit that fits goes first, followed by the remainder in the next
    /// finer unit when there is one: years, months, weeks, days, hours, minutes.
    /// Anything shorter than a minute, including negative durations, is `"Just Now"`.
    pub fn format(&self, elapsed: TimeDelta) -> String {
        let minutes = elapsed.num_minutes();
        if minutes < 1 {
            return JUST_NOW.into();
        }

        let hours = elapsed.num_hours();
        let days = elapsed.num_days();

        let years = days / 365;
        if years >= 1 {
            return phrase((years, "year"), None);
        }

        let months = days / 31;
        let weeks = days / 7;
        if months >= 1 {
            let rest = (weeks as f64 - months as f64 * WEEKS_PER_MONTH) as i64;
            return phrase((months, "month"), Some((rest, "week")));
        }
        if weeks >= 1 {
            return phrase((weeks, "week"), Some((days - weeks * 7, "day")));
        }
        if days >= 1 {
            return phrase((days, "day"), Some((hours - days * 24, "hour")));
        }
        if hours >= 1 {
            return phrase((hours, "hour"), Some((minutes - hours * 60, "minute")));
        }

        if self.always_plural_minutes {
            format!("{} minutes ago", minutes)
        } else {
            phrase((minutes, "minute"), None)
        }
    }
}

impl Default for RelativeFormat {
    fn default() -> Self {
        Self {
            always_plural_minutes: true,
        }
    }
}

// ---

fn phrase(primary: (i64, &str), rest: Option<(i64, &str)>) -> String {
    let mut result = String::new();
    push_count(&mut result, primary);
    result.push_str(" ago");
    if let Some(rest) = rest.filter(|&(n, _)| n > 0) {
        result.push_str(", ");
        push_count(&mut result, rest);
    }
    result
}

fn push_count(buf: &mut String, (n, unit): (i64, &str)) {
    let suffix = if n >= 2 { "s" } else { "" };
    write!(buf, "{} {}{}", n, unit, suffix).ok();
}

#[cfg(test)]
mod tests;
