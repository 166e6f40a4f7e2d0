//! Ordered collection of committed rules, at most one per measure.

use recur_core::CalendarDate;

use crate::error::{MISSING_DAYS_OF_WEEK, RecurError, RecurResult};
use crate::matcher;
use crate::measure::Measure;
use crate::rule::Rule;

/// Rules in declaration order. Replacing a measure keeps its original slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `rule`, replacing any rule for the same measure. Returns the
    /// replaced rule.
    pub fn insert(&mut self, rule: Rule) -> Option<Rule> {
        match self
            .rules
            .iter_mut()
            .find(|existing| existing.measure() == rule.measure())
        {
            Some(existing) => Some(std::mem::replace(existing, rule)),
            None => {
                self.rules.push(rule);
                None
            }
        }
    }

    pub fn remove(&mut self, measure: Measure) -> Option<Rule> {
        let position = self.rules.iter().position(|rule| rule.measure() == measure)?;
        Some(self.rules.remove(position))
    }

    #[must_use]
    pub fn get(&self, measure: Measure) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.measure() == measure)
    }

    #[must_use]
    pub fn contains(&self, measure: Measure) -> bool {
        self.get(measure).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// ## Summary
    /// Checks that the rules can be evaluated together.
    ///
    /// ## Errors
    /// Returns `RecurError::Configuration` if a `weeksOfMonthByDay` rule has
    /// no `daysOfWeek` rule to pair with.
    pub fn validate(&self) -> RecurResult<()> {
        if self.contains(Measure::WeeksOfMonthByDay) && !self.contains(Measure::DaysOfWeek) {
            tracing::warn!("weeksOfMonthByDay rule without daysOfWeek");
            return Err(RecurError::Configuration(MISSING_DAYS_OF_WEEK));
        }
        Ok(())
    }

    /// ## Summary
    /// True when every rule accepts `date`. An empty set accepts everything.
    ///
    /// ## Errors
    /// Returns `RecurError::Configuration` if the set fails [`Self::validate`].
    pub fn matches<D: CalendarDate>(&self, date: &D, anchor: &D) -> RecurResult<bool> {
        self.validate()?;
        Ok(self.accepts(date, anchor))
    }

    /// Rule evaluation without the combination check; callers validate once
    /// up front.
    pub(crate) fn accepts<D: CalendarDate>(&self, date: &D, anchor: &D) -> bool {
        self.rules.iter().all(|rule| self.rule_matches(rule, date, anchor))
    }

    fn rule_matches<D: CalendarDate>(&self, rule: &Rule, date: &D, anchor: &D) -> bool {
        let units = rule.units();
        match rule.measure() {
            Measure::Days => matcher::days(date, anchor, units),
            Measure::Weeks => matcher::weeks(date, anchor, units),
            Measure::Months => matcher::months(date, anchor, units),
            Measure::Years => matcher::years(date, anchor, units),
            Measure::DaysOfWeek => matcher::days_of_week(date, units),
            Measure::DaysOfMonth => matcher::days_of_month(date, units),
            Measure::WeeksOfMonth => matcher::weeks_of_month(date, units),
            Measure::WeeksOfMonthByDay => self
                .get(Measure::DaysOfWeek)
                .is_some_and(|weekdays| {
                    matcher::weeks_of_month_by_day(date, units, weekdays.units())
                }),
            Measure::WeekOfYear => matcher::week_of_year(date, units),
            Measure::MonthsOfYear => matcher::months_of_year(date, units),
        }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
