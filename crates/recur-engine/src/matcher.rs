//! Matcher library: one pure predicate per measure.
//!
//! Units inside a rule combine with OR, so every predicate succeeds when any
//! one unit fits. Interval predicates compare against an anchor; calendar
//! predicates only look at a field of the date itself.

use recur_core::{CalendarDate, DateUnit};

use crate::units::Units;

/// Day offset from the anchor is a multiple of some unit.
#[must_use]
pub fn days<D: CalendarDate>(date: &D, anchor: &D, units: &Units) -> bool {
    let offset = anchor.days_until(date);
    units.iter().any(|every| offset % every == 0)
}

/// Day offset is a whole number of weeks, and that week count is a multiple
/// of some unit.
#[must_use]
pub fn weeks<D: CalendarDate>(date: &D, anchor: &D, units: &Units) -> bool {
    let offset = anchor.days_until(date);
    if offset % 7 != 0 {
        return false;
    }
    let weeks = offset / 7;
    units.iter().any(|every| weeks % every == 0)
}

/// Calendar-month difference is a multiple of some unit and the date is the
/// anchor shifted by exactly that many months.
#[must_use]
pub fn months<D: CalendarDate>(date: &D, anchor: &D, units: &Units) -> bool {
    let months = anchor.months_until(date);
    units.iter().any(|every| months % every == 0) && lands_on(anchor, date, months, DateUnit::Month)
}

/// Calendar-year difference is a multiple of some unit and the date is the
/// anchor shifted by exactly that many years.
#[must_use]
pub fn years<D: CalendarDate>(date: &D, anchor: &D, units: &Units) -> bool {
    let years = anchor.years_until(date);
    units.iter().any(|every| years % every == 0) && lands_on(anchor, date, years, DateUnit::Year)
}

#[must_use]
pub fn days_of_week<D: CalendarDate>(date: &D, units: &Units) -> bool {
    units.contains_field(date.day_of_week())
}

#[must_use]
pub fn days_of_month<D: CalendarDate>(date: &D, units: &Units) -> bool {
    units.contains_field(date.day_of_month())
}

#[must_use]
pub fn weeks_of_month<D: CalendarDate>(date: &D, units: &Units) -> bool {
    units.contains_field(date.week_of_month())
}

/// The date's weekday is one of `weekdays` and its ordinal occurrence within
/// the month is one of `units`.
#[must_use]
pub fn weeks_of_month_by_day<D: CalendarDate>(date: &D, units: &Units, weekdays: &Units) -> bool {
    days_of_week(date, weekdays) && units.contains_field(date.week_of_month_by_day())
}

#[must_use]
pub fn week_of_year<D: CalendarDate>(date: &D, units: &Units) -> bool {
    units.contains_field(date.iso_week_number())
}

/// Month is zero-based: January is 0.
#[must_use]
pub fn months_of_year<D: CalendarDate>(date: &D, units: &Units) -> bool {
    units.contains_field(date.month_index())
}

fn lands_on<D: CalendarDate>(anchor: &D, date: &D, amount: i64, unit: DateUnit) -> bool {
    anchor
        .shift(amount, unit)
        .is_ok_and(|shifted| shifted == *date)
}
