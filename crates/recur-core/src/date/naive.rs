//! [`CalendarDate`] adapter for `chrono::NaiveDate`.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, TimeDelta, Utc};

use super::{CalendarDate, DateInput, DateUnit};
use crate::constants::ISO_DATE_FORMAT;
use crate::error::{CoreError, CoreResult};

/// Date-time layouts accepted in addition to a bare ISO date. The time part
/// is dropped.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

impl CalendarDate for NaiveDate {
    fn parse_date(input: &str) -> CoreResult<Self> {
        let trimmed = input.trim();

        if let Ok(date) = Self::parse_from_str(trimmed, ISO_DATE_FORMAT) {
            return Ok(date);
        }

        // Offset-carrying timestamps keep the calendar date they name locally
        if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(datetime.date_naive());
        }

        DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .map(|datetime| datetime.date())
            .ok_or_else(|| CoreError::InvalidDate(trimmed.to_string()))
    }

    fn today() -> Self {
        Utc::now().date_naive()
    }

    fn shift(&self, amount: i64, unit: DateUnit) -> CoreResult<Self> {
        let shifted = match unit {
            DateUnit::Day => shift_days(*self, amount),
            DateUnit::Week => amount
                .checked_mul(7)
                .and_then(|days| shift_days(*self, days)),
            DateUnit::Month => shift_months(*self, amount),
            DateUnit::Year => amount
                .checked_mul(12)
                .and_then(|months| shift_months(*self, months)),
        };

        shifted.ok_or_else(|| {
            CoreError::DateOutOfRange(format!("{self} shifted by {amount} {unit}(s)"))
        })
    }

    fn days_until(&self, other: &Self) -> i64 {
        other.signed_duration_since(*self).num_days()
    }

    fn render(&self, pattern: &str) -> CoreResult<String> {
        let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(CoreError::InvalidFormat(pattern.to_string()));
        }

        let mut rendered = String::new();
        write!(rendered, "{}", self.format_with_items(items.iter()))
            .map_err(|_e| CoreError::InvalidFormat(pattern.to_string()))?;
        Ok(rendered)
    }

    fn day_of_month(&self) -> u32 {
        self.day()
    }

    fn day_of_week(&self) -> u32 {
        self.weekday().num_days_from_sunday()
    }

    fn iso_week_number(&self) -> u32 {
        self.iso_week().week()
    }

    fn month_index(&self) -> u32 {
        self.month0()
    }

    fn calendar_year(&self) -> i32 {
        Datelike::year(self)
    }
}

impl DateInput<NaiveDate> for NaiveDate {
    fn into_date(self) -> CoreResult<NaiveDate> {
        Ok(self)
    }
}

impl DateInput<NaiveDate> for &NaiveDate {
    fn into_date(self) -> CoreResult<NaiveDate> {
        Ok(*self)
    }
}

fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    TimeDelta::try_days(days).and_then(|delta| date.checked_add_signed(delta))
}

fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(input: &str) -> NaiveDate {
        NaiveDate::parse_date(input).expect("valid date")
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            date("2020-01-01"),
            NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid")
        );
        assert_eq!(date(" 2017-09-27 "), date("2017-09-27"));
    }

    #[test]
    fn parses_datetimes_as_their_calendar_date() {
        assert_eq!(date("2020-01-01T23:59:59"), date("2020-01-01"));
        assert_eq!(date("2020-01-01 08:00:00"), date("2020-01-01"));
        assert_eq!(date("2020-01-01T23:30:00-05:00"), date("2020-01-01"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            NaiveDate::parse_date("not a date"),
            Err(CoreError::InvalidDate(_))
        ));
        assert!(NaiveDate::parse_date("2020-02-30").is_err());
    }

    #[test]
    fn shifts_by_each_unit() {
        let start = date("2020-01-31");
        assert_eq!(start.shift(1, DateUnit::Day).expect("shift"), date("2020-02-01"));
        assert_eq!(start.shift(-2, DateUnit::Week).expect("shift"), date("2020-01-17"));
        // Clamped to the end of February in a leap year
        assert_eq!(start.shift(1, DateUnit::Month).expect("shift"), date("2020-02-29"));
        assert_eq!(start.shift(-3, DateUnit::Month).expect("shift"), date("2019-10-31"));
        assert_eq!(
            date("2020-02-29").shift(1, DateUnit::Year).expect("shift"),
            date("2021-02-28")
        );
    }

    #[test]
    fn shift_out_of_range_is_an_error() {
        let result = NaiveDate::MAX.shift(1, DateUnit::Day);
        assert!(matches!(result, Err(CoreError::DateOutOfRange(_))));
        assert!(date("2020-01-01").shift(i64::MAX, DateUnit::Week).is_err());
    }

    #[test]
    fn day_difference_is_signed() {
        let anchor = date("2020-01-01");
        assert_eq!(anchor.days_until(&date("2020-01-04")), 3);
        assert_eq!(anchor.days_until(&date("2019-12-30")), -2);
        assert_eq!(anchor.days_until(&anchor), 0);
    }

    #[test]
    fn accessors_follow_engine_conventions() {
        // 2020-01-01 was a Wednesday in ISO week 1
        let new_year = date("2020-01-01");
        assert_eq!(new_year.day_of_month(), 1);
        assert_eq!(new_year.day_of_week(), 3);
        assert_eq!(new_year.iso_week_number(), 1);
        assert_eq!(new_year.month_index(), 0);
        assert_eq!(new_year.calendar_year(), 2020);
        assert_eq!(date("2020-05-12").iso_week_number(), 20);
    }

    #[test]
    fn week_of_month_counts_sunday_boundaries() {
        assert_eq!(date("2020-01-01").week_of_month(), 0);
        assert_eq!(date("2020-01-04").week_of_month(), 0);
        assert_eq!(date("2020-01-05").week_of_month(), 1);
        assert_eq!(date("2020-01-06").week_of_month(), 1);
        assert_eq!(date("2020-01-21").week_of_month(), 3);
        assert_eq!(date("2020-01-26").week_of_month(), 4);
        // January 2021 starts on a Friday and reaches a sixth row
        assert_eq!(date("2021-01-31").week_of_month(), 5);
    }

    #[test]
    fn week_of_month_by_day_is_weekday_ordinal() {
        assert_eq!(date("2020-01-05").week_of_month_by_day(), 0);
        assert_eq!(date("2020-01-19").week_of_month_by_day(), 2);
        assert_eq!(date("2017-09-27").week_of_month_by_day(), 3);
        assert_eq!(date("2020-01-30").week_of_month_by_day(), 4);
    }

    #[test]
    fn calendar_differences_ignore_the_day() {
        let anchor = date("2020-01-31");
        assert_eq!(anchor.months_until(&date("2020-03-01")), 2);
        assert_eq!(anchor.months_until(&date("2019-11-15")), -2);
        assert_eq!(anchor.years_until(&date("2023-01-01")), 3);
    }

    #[test]
    fn renders_with_patterns() {
        let day = date("2020-02-05");
        assert_eq!(day.render("%Y-%m-%d").expect("render"), "2020-02-05");
        assert_eq!(day.render("%d/%m/%Y").expect("render"), "05/02/2020");
        assert_eq!(day.render("%A").expect("render"), "Wednesday");
        assert!(matches!(day.render("%Q"), Err(CoreError::InvalidFormat(_))));
        assert!(matches!(day.render("%H:%M"), Err(CoreError::InvalidFormat(_))));
    }

    #[test]
    fn string_inputs_convert() {
        let parsed: NaiveDate = "2020-01-01".into_date().expect("parse");
        assert_eq!(parsed, date("2020-01-01"));
        let owned: NaiveDate = String::from("2020-01-02").into_date().expect("parse");
        assert_eq!(owned, date("2020-01-02"));
    }
}
