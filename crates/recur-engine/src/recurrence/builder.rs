use recur_core::CalendarDate;

use super::Recurrence;
use crate::error::RecurResult;
use crate::measure::Measure;
use crate::rule::Rule;
use crate::units::UnitsInput;

/// Half-built rule: units from `every` waiting for a measure selector.
/// Never exported with the recurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingRule {
    units: Option<UnitsInput>,
}

impl PendingRule {
    #[must_use]
    pub const fn units(&self) -> Option<&UnitsInput> {
        self.units.as_ref()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.units.is_none()
    }
}

impl<D: CalendarDate> Recurrence<D> {
    /// ## Summary
    /// Stores `units` for the next measure selector, replacing any units
    /// still pending. Nothing is committed until a selector runs.
    ///
    /// ## Errors
    /// Does not fail.
    pub fn every(&mut self, units: impl Into<UnitsInput>) -> RecurResult<&mut Self> {
        self.pending.units = Some(units.into());
        Ok(self)
    }

    /// ## Summary
    /// Commits a rule for `measure` in one call.
    ///
    /// ## Errors
    /// Returns `RecurError::InvalidUnits` if the units are rejected.
    pub fn every_as(
        &mut self,
        units: impl Into<UnitsInput>,
        measure: Measure,
    ) -> RecurResult<&mut Self> {
        self.pending = PendingRule {
            units: Some(units.into()),
        };
        self.commit_pending(measure)?;
        Ok(self)
    }

    /// ## Summary
    /// Commits pending units as a rule for `measure`, replacing any existing
    /// rule for it. Without pending units this does nothing.
    ///
    /// ## Errors
    /// Returns `RecurError::InvalidUnits` if the pending units are rejected.
    pub fn select(&mut self, measure: Measure) -> RecurResult<&mut Self> {
        if self.pending.units.is_none() {
            tracing::trace!(%measure, "No pending units, selector ignored");
            return Ok(self);
        }
        self.commit_pending(measure)?;
        Ok(self)
    }

    fn commit_pending(&mut self, measure: Measure) -> RecurResult<()> {
        let Some(units) = std::mem::take(&mut self.pending).units else {
            return Ok(());
        };

        let rule = Rule::new(measure, &units)?;
        tracing::trace!(%measure, units = rule.units().len(), "Committing rule");
        if self.rules.insert(rule).is_some() {
            tracing::trace!(%measure, "Replaced existing rule");
        }
        Ok(())
    }
}

macro_rules! measure_selectors {
    ($($measure:ident => $plural:ident, $singular:ident;)*) => {
        impl<D: CalendarDate> Recurrence<D> {
            $(
                #[doc = concat!("Commits pending units as the `", stringify!($plural), "` rule.")]
                ///
                /// ## Errors
                /// Returns `RecurError::InvalidUnits` if the pending units are rejected.
                pub fn $plural(&mut self) -> RecurResult<&mut Self> {
                    self.select(Measure::$measure)
                }

                #[doc = concat!("Alias of [`Self::", stringify!($plural), "`].")]
                ///
                /// ## Errors
                /// Returns `RecurError::InvalidUnits` if the pending units are rejected.
                pub fn $singular(&mut self) -> RecurResult<&mut Self> {
                    self.select(Measure::$measure)
                }
            )*
        }
    };
}

measure_selectors! {
    Days => days, day;
    Weeks => weeks, week;
    Months => months, month;
    Years => years, year;
    DaysOfWeek => days_of_week, day_of_week;
    DaysOfMonth => days_of_month, day_of_month;
    WeeksOfMonth => weeks_of_month, week_of_month;
    WeeksOfMonthByDay => weeks_of_month_by_day, week_of_month_by_day;
    WeekOfYear => weeks_of_year, week_of_year;
    MonthsOfYear => months_of_year, month_of_year;
}
