//! The recurrence itself: anchor, window, rules and exceptions.
//!
//! A [`Recurrence`] is built fluently (see the selector methods in
//! `builder`), queried with [`Recurrence::matches`], and walked with the
//! enumerators in `enumerate`.

mod builder;
mod enumerate;

pub use builder::PendingRule;
pub use enumerate::{Direction, Occurrences};

use std::collections::BTreeSet;

use chrono::NaiveDate;
use recur_core::constants::DEFAULT_MAX_SCAN_DAYS;
use recur_core::{CalendarDate, DateInput};

use crate::error::RecurResult;
use crate::measure::Measure;
use crate::rule_set::RuleSet;

/// ## Summary
/// A set of rules evaluated against calendar dates.
///
/// Interval rules (days, weeks, months, years) count from the window start,
/// or from the anchor when no start is set. Dates outside `[start, end]` and
/// exception dates never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recurrence<D: CalendarDate = NaiveDate> {
    anchor: D,
    start: Option<D>,
    end: Option<D>,
    from: Option<D>,
    rules: RuleSet,
    exceptions: BTreeSet<D>,
    pending: PendingRule,
    scan_limit: u32,
}

impl<D: CalendarDate> Recurrence<D> {
    fn with_anchor(anchor: D) -> Self {
        Self {
            anchor,
            start: None,
            end: None,
            from: None,
            rules: RuleSet::new(),
            exceptions: BTreeSet::new(),
            pending: PendingRule::default(),
            scan_limit: DEFAULT_MAX_SCAN_DAYS,
        }
    }

    /// ## Summary
    /// Creates an unbounded recurrence anchored at `anchor`.
    ///
    /// ## Errors
    /// Returns `RecurError::Core` if `anchor` is a string that does not parse.
    pub fn new(anchor: impl DateInput<D>) -> RecurResult<Self> {
        Ok(Self::with_anchor(anchor.into_date()?))
    }

    /// Creates an unbounded recurrence anchored at today's date.
    #[must_use]
    pub fn today() -> Self {
        Self::with_anchor(D::today())
    }

    /// ## Summary
    /// Creates a recurrence bounded by `[start, end]` and anchored at `start`.
    /// Ordering of the bounds is only checked when enumerating.
    ///
    /// ## Errors
    /// Returns `RecurError::Core` if either bound does not parse.
    pub fn between(start: impl DateInput<D>, end: impl DateInput<D>) -> RecurResult<Self> {
        let start = start.into_date()?;
        let mut recurrence = Self::with_anchor(start.clone());
        recurrence.start = Some(start);
        recurrence.end = Some(end.into_date()?);
        Ok(recurrence)
    }

    /// Sets the maximum number of consecutive non-matching days `next` and
    /// `previous` examine before failing.
    #[must_use]
    pub fn with_scan_limit(mut self, limit: u32) -> Self {
        self.scan_limit = limit;
        self
    }

    pub fn set_scan_limit(&mut self, limit: u32) -> &mut Self {
        self.scan_limit = limit;
        self
    }

    #[must_use]
    pub const fn scan_limit(&self) -> u32 {
        self.scan_limit
    }

    #[must_use]
    pub const fn anchor(&self) -> &D {
        &self.anchor
    }

    #[must_use]
    pub const fn start_date(&self) -> Option<&D> {
        self.start.as_ref()
    }

    #[must_use]
    pub const fn end_date(&self) -> Option<&D> {
        self.end.as_ref()
    }

    /// Temporary starting point for enumeration, if one is set.
    #[must_use]
    pub const fn from_date(&self) -> Option<&D> {
        self.from.as_ref()
    }

    /// ## Summary
    /// Sets the window start. Does not check it against the end date.
    ///
    /// ## Errors
    /// Returns `RecurError::Core` if `date` does not parse.
    pub fn set_start_date(&mut self, date: impl DateInput<D>) -> RecurResult<&mut Self> {
        self.start = Some(date.into_date()?);
        Ok(self)
    }

    /// ## Summary
    /// Sets the window end. Does not check it against the start date.
    ///
    /// ## Errors
    /// Returns `RecurError::Core` if `date` does not parse.
    pub fn set_end_date(&mut self, date: impl DateInput<D>) -> RecurResult<&mut Self> {
        self.end = Some(date.into_date()?);
        Ok(self)
    }

    /// ## Summary
    /// Overrides where `next`, `previous` and `all` begin.
    ///
    /// ## Errors
    /// Returns `RecurError::Core` if `date` does not parse.
    pub fn set_from_date(&mut self, date: impl DateInput<D>) -> RecurResult<&mut Self> {
        self.from = Some(date.into_date()?);
        Ok(self)
    }

    pub fn clear_start_date(&mut self) -> &mut Self {
        self.start = None;
        self
    }

    pub fn clear_end_date(&mut self) -> &mut Self {
        self.end = None;
        self
    }

    pub fn clear_from_date(&mut self) -> &mut Self {
        self.from = None;
        self
    }

    /// Date enumeration starts from: the `from` override, else the window
    /// start, else the anchor.
    #[must_use]
    pub fn reference(&self) -> &D {
        self.from
            .as_ref()
            .or(self.start.as_ref())
            .unwrap_or(&self.anchor)
    }

    /// Reference point for interval rules.
    fn rule_anchor(&self) -> &D {
        self.start.as_ref().unwrap_or(&self.anchor)
    }

    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[must_use]
    pub fn has_rule(&self, measure: Measure) -> bool {
        self.rules.contains(measure)
    }

    /// True when at least one rule is committed.
    #[must_use]
    pub fn repeats(&self) -> bool {
        !self.rules.is_empty()
    }

    /// Builder state not yet committed to a rule.
    #[must_use]
    pub const fn pending(&self) -> &PendingRule {
        &self.pending
    }

    /// Removes the rule for `measure`, if any.
    pub fn forget(&mut self, measure: Measure) -> &mut Self {
        if self.rules.remove(measure).is_some() {
            tracing::trace!(%measure, "rule removed");
        }
        self
    }

    /// Exception dates in ascending order.
    #[must_use]
    pub const fn exceptions(&self) -> &BTreeSet<D> {
        &self.exceptions
    }

    /// ## Summary
    /// Excludes `date` from matching.
    ///
    /// ## Errors
    /// Returns `RecurError::Core` if `date` does not parse.
    pub fn except(&mut self, date: impl DateInput<D>) -> RecurResult<&mut Self> {
        self.exceptions.insert(date.into_date()?);
        Ok(self)
    }

    /// ## Summary
    /// Removes `date` from the exceptions, letting it match again.
    ///
    /// ## Errors
    /// Returns `RecurError::Core` if `date` does not parse.
    pub fn forget_exception(&mut self, date: impl DateInput<D>) -> RecurResult<&mut Self> {
        let date = date.into_date()?;
        self.exceptions.remove(&date);
        Ok(self)
    }

    /// ## Summary
    /// Tests whether `date` satisfies the recurrence.
    ///
    /// ## Errors
    /// Returns `RecurError::Core` if `date` does not parse, or
    /// `RecurError::Configuration` if the rules cannot be evaluated together.
    pub fn matches(&self, date: impl DateInput<D>) -> RecurResult<bool> {
        self.matches_date(&date.into_date()?)
    }

    /// ## Summary
    /// Tests an already-built date.
    ///
    /// ## Errors
    /// Returns `RecurError::Configuration` if the rules cannot be evaluated
    /// together.
    pub fn matches_date(&self, date: &D) -> RecurResult<bool> {
        self.rules.validate()?;
        Ok(self.accepts(date))
    }

    fn in_window(&self, date: &D) -> bool {
        self.start.as_ref().is_none_or(|start| date >= start)
            && self.end.as_ref().is_none_or(|end| date <= end)
    }

    /// Window, exceptions and rules, assuming the rules already validated.
    fn accepts(&self, date: &D) -> bool {
        self.in_window(date)
            && !self.exceptions.contains(date)
            && self.rules.accepts(date, self.rule_anchor())
    }
}
