// third-party imports
use chrono::{DateTime, Datelike, TimeDelta, TimeZone, Utc, Weekday};

// local imports
use crate::{collection::ValueExt, relative::to_relative};

// ---

pub trait DateTimeExt: Sized {
    /// Describes how long ago the moment was, relative to the current time.
    fn to_relative(&self) -> String;

    /// Describes how long before `now` the moment was.
    fn to_relative_from<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String;

    /// Tests whether the moment falls on Saturday or Sunday in its own time zone.
    fn is_weekend(&self) -> bool;

    /// Adds a number of 7-day weeks, `None` on overflow.
    fn add_weeks(self, weeks: i64) -> Option<Self>;
}

impl<Tz: TimeZone> DateTimeExt for DateTime<Tz> {
    fn to_relative(&self) -> String {
        self.to_relative_from(&Utc::now())
    }

    fn to_relative_from<Tz2: TimeZone>(&self, now: &DateTime<Tz2>) -> String {
        to_relative(self, now)
    }

    fn is_weekend(&self) -> bool {
        self.weekday().equals_any(&[Weekday::Sat, Weekday::Sun])
    }

    fn add_weeks(self, weeks: i64) -> Option<Self> {
        self.checked_add_signed(TimeDelta::try_weeks(weeks)?)
    }
}
