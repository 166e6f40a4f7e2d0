//! Calendar date capability consumed by the recurrence engine.
//!
//! The engine never talks to a date library directly. It is generic over
//! [`CalendarDate`], and each host library gets a small adapter; the one
//! shipped here covers [`chrono::NaiveDate`].
//!
//! ## Conventions
//!
//! - Day of week counts from Sunday = 0 to Saturday = 6.
//! - Months are zero-based (January = 0).
//! - Week of year is the ISO 8601 week number.

mod naive;
mod zone;

pub use zone::today_in_zone;

use std::fmt;

use crate::error::CoreResult;

/// Calendar unit used for date arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateUnit {
    Day,
    Week,
    Month,
    Year,
}

impl DateUnit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for DateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ## Summary
/// An immutable, date-only value the engine can match and step through.
///
/// Ordering must be at day granularity. `Display` renders the ISO
/// `YYYY-MM-DD` form used for exported options.
pub trait CalendarDate: Clone + Ord + fmt::Debug + fmt::Display {
    /// ## Summary
    /// Parses a date from its textual form.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidDate` if the input is not a recognizable date.
    fn parse_date(input: &str) -> CoreResult<Self>;

    /// Today's date in the adapter's reference zone.
    fn today() -> Self;

    /// ## Summary
    /// Returns a new date shifted by `amount` units; negative amounts move
    /// backwards. Month and year shifts clamp to the end of shorter months.
    ///
    /// ## Errors
    /// Returns `CoreError::DateOutOfRange` if the result is not representable.
    fn shift(&self, amount: i64, unit: DateUnit) -> CoreResult<Self>;

    /// Signed whole-day difference from `self` to `other`.
    fn days_until(&self, other: &Self) -> i64;

    /// ## Summary
    /// Renders the date with a strftime-style pattern.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidFormat` if the pattern is malformed or asks
    /// for fields a date does not carry.
    fn render(&self, pattern: &str) -> CoreResult<String>;

    /// Day of month, 1-based.
    fn day_of_month(&self) -> u32;

    /// Day of week, Sunday = 0.
    fn day_of_week(&self) -> u32;

    /// ISO 8601 week number.
    fn iso_week_number(&self) -> u32;

    /// Month, January = 0.
    fn month_index(&self) -> u32;

    fn calendar_year(&self) -> i32;

    /// ## Summary
    /// Zero-based calendar week of the month, with weeks starting on Sunday.
    ///
    /// Days before the first Sunday fall in week 0, so a month that starts
    /// midweek has its first seven days split across two indices.
    fn week_of_month(&self) -> u32 {
        let day = self.day_of_month();
        let first_weekday = (self.day_of_week() + 7 - (day - 1) % 7) % 7;
        (day + first_weekday - 1) / 7
    }

    /// Zero-based ordinal of this weekday's occurrence within the month;
    /// the third Friday has index 2.
    fn week_of_month_by_day(&self) -> u32 {
        (self.day_of_month() - 1) / 7
    }

    /// Signed calendar-month difference, ignoring the day of month.
    fn months_until(&self, other: &Self) -> i64 {
        (i64::from(other.calendar_year()) - i64::from(self.calendar_year())) * 12
            + i64::from(other.month_index())
            - i64::from(self.month_index())
    }

    /// Signed calendar-year difference.
    fn years_until(&self, other: &Self) -> i64 {
        i64::from(other.calendar_year()) - i64::from(self.calendar_year())
    }
}

/// ## Summary
/// Anything that can be turned into a calendar date: a date value or its
/// textual form.
pub trait DateInput<D: CalendarDate> {
    /// ## Errors
    /// Returns an error if the input cannot be parsed as a date.
    fn into_date(self) -> CoreResult<D>;
}

impl<D: CalendarDate> DateInput<D> for &str {
    fn into_date(self) -> CoreResult<D> {
        D::parse_date(self)
    }
}

impl<D: CalendarDate> DateInput<D> for String {
    fn into_date(self) -> CoreResult<D> {
        D::parse_date(&self)
    }
}

impl<D: CalendarDate> DateInput<D> for &String {
    fn into_date(self) -> CoreResult<D> {
        D::parse_date(self)
    }
}
