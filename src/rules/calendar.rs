//! Whole-day calendar arithmetic used by the rules

use std::fmt;

use chrono::{Datelike, NaiveDate, TimeDelta};

/// Display format for dates embedded in messages (day/month/year)
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Signed number of calendar days from `from` to `to`
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Move `date` by a signed number of days, saturating at the calendar bounds
#[must_use]
pub fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(if days < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
}

#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Window from `start_offset` to `end_offset` days relative to `anchor`
    #[must_use]
    pub fn around(anchor: NaiveDate, start_offset: i64, end_offset: i64) -> Self {
        Self {
            start: shift(anchor, start_offset),
            end: shift(anchor, end_offset),
        }
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entre el {} y el {}",
            format_date(self.start),
            format_date(self.end)
        )
    }
}

/// New York cargo-hold embargo: Dec 15 of the date's year through Apr 15 of
/// the following year.
///
/// Both bounds are tested with an inclusive OR, so every date qualifies.
#[must_use]
pub fn in_winter_embargo(date: NaiveDate) -> bool {
    let year = date.year();
    let starts = NaiveDate::from_ymd_opt(year, 12, 15);
    let ends = NaiveDate::from_ymd_opt(year + 1, 4, 15);

    starts.is_some_and(|start| date >= start) || ends.is_some_and(|end| date <= end)
}
