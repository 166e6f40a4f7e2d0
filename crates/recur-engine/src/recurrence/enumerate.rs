use recur_core::{CalendarDate, DateUnit};

use super::Recurrence;
use crate::error::{RecurError, RecurResult, START_AFTER_END};

/// Which way enumeration steps through the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// ## Summary
/// Lazy day-by-day walk over matching dates.
///
/// Stops when the window bound in its direction is crossed (`end` going
/// forward, `start` going backward) or the calendar runs out. When a scan
/// limit is set, that many consecutive misses yield
/// `RecurError::ScanLimitExceeded` and end the walk.
#[derive(Debug)]
pub struct Occurrences<'a, D: CalendarDate> {
    recurrence: &'a Recurrence<D>,
    direction: Direction,
    candidate: Option<D>,
    scan_limit: Option<u32>,
    misses: u32,
}

impl<D: CalendarDate> Occurrences<'_, D> {
    fn past_bound(&self, date: &D) -> bool {
        match self.direction {
            Direction::Forward => self.recurrence.end.as_ref().is_some_and(|end| date > end),
            Direction::Backward => self
                .recurrence
                .start
                .as_ref()
                .is_some_and(|start| date < start),
        }
    }
}

impl<D: CalendarDate> Iterator for Occurrences<'_, D> {
    type Item = RecurResult<D>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let date = self.candidate.take()?;
            if self.past_bound(&date) {
                return None;
            }
            self.candidate = date.shift(self.direction.step(), DateUnit::Day).ok();

            if self.recurrence.accepts(&date) {
                self.misses = 0;
                return Some(Ok(date));
            }

            self.misses = self.misses.saturating_add(1);
            if let Some(limit) = self.scan_limit.filter(|limit| self.misses >= *limit) {
                tracing::debug!(%limit, last = %date, "Scan limit reached");
                self.candidate = None;
                return Some(Err(RecurError::ScanLimitExceeded { limit }));
            }
        }
    }
}

impl<D: CalendarDate> Recurrence<D> {
    /// ## Summary
    /// Lazily walks matching dates from the reference date, excluding it.
    /// Subject to the scan limit.
    ///
    /// ## Errors
    /// Returns `RecurError::Configuration` if the rules cannot be evaluated
    /// together.
    pub fn occurrences(&self, direction: Direction) -> RecurResult<Occurrences<'_, D>> {
        self.rules.validate()?;
        Ok(Occurrences {
            recurrence: self,
            direction,
            candidate: self.reference().shift(direction.step(), DateUnit::Day).ok(),
            scan_limit: Some(self.scan_limit),
            misses: 0,
        })
    }

    /// ## Summary
    /// Returns up to `count` matching dates after the reference date, in
    /// ascending order. Fewer are returned if the window end is reached.
    ///
    /// ## Errors
    /// Returns `RecurError::Configuration` for an invalid rule combination or
    /// `RecurError::ScanLimitExceeded` if no match turns up within the scan
    /// limit.
    #[tracing::instrument(skip(self), fields(reference = %self.reference()))]
    pub fn next(&self, count: usize) -> RecurResult<Vec<D>> {
        self.take_occurrences(Direction::Forward, count)
    }

    /// ## Summary
    /// Returns up to `count` matching dates before the reference date, in
    /// descending order. Fewer are returned if the window start is reached.
    ///
    /// ## Errors
    /// Same as [`Self::next`].
    #[tracing::instrument(skip(self), fields(reference = %self.reference()))]
    pub fn previous(&self, count: usize) -> RecurResult<Vec<D>> {
        self.take_occurrences(Direction::Backward, count)
    }

    /// ## Summary
    /// Returns every matching date from the reference date through the end
    /// date, both inclusive.
    ///
    /// ## Errors
    /// Returns `RecurError::Unbounded` without an end date,
    /// `RecurError::Range` if the window start is after the end date, or
    /// `RecurError::Configuration` for an invalid rule combination.
    #[tracing::instrument(skip(self), fields(reference = %self.reference()))]
    pub fn all(&self) -> RecurResult<Vec<D>> {
        let Some(end) = self.end.as_ref() else {
            return Err(RecurError::Unbounded);
        };
        if self.rule_anchor() > end {
            return Err(RecurError::Range(START_AFTER_END));
        }
        self.rules.validate()?;

        let occurrences = Occurrences {
            recurrence: self,
            direction: Direction::Forward,
            candidate: Some(self.reference().clone()),
            scan_limit: None,
            misses: 0,
        };
        let dates = occurrences.collect::<RecurResult<Vec<_>>>()?;
        tracing::debug!(found = dates.len(), "Enumerated window");
        Ok(dates)
    }

    /// ## Summary
    /// [`Self::next`] rendered with a strftime-style `pattern`.
    ///
    /// ## Errors
    /// Same as [`Self::next`], plus `RecurError::Core` for a bad pattern.
    pub fn next_formatted(&self, count: usize, pattern: &str) -> RecurResult<Vec<String>> {
        render_all(&self.next(count)?, pattern)
    }

    /// ## Summary
    /// [`Self::previous`] rendered with a strftime-style `pattern`.
    ///
    /// ## Errors
    /// Same as [`Self::previous`], plus `RecurError::Core` for a bad pattern.
    pub fn previous_formatted(&self, count: usize, pattern: &str) -> RecurResult<Vec<String>> {
        render_all(&self.previous(count)?, pattern)
    }

    /// ## Summary
    /// [`Self::all`] rendered with a strftime-style `pattern`.
    ///
    /// ## Errors
    /// Same as [`Self::all`], plus `RecurError::Core` for a bad pattern.
    pub fn all_formatted(&self, pattern: &str) -> RecurResult<Vec<String>> {
        render_all(&self.all()?, pattern)
    }

    fn take_occurrences(&self, direction: Direction, count: usize) -> RecurResult<Vec<D>> {
        let dates = self
            .occurrences(direction)?
            .take(count)
            .collect::<RecurResult<Vec<_>>>()?;
        tracing::debug!(requested = count, found = dates.len(), "Enumerated occurrences");
        Ok(dates)
    }
}

fn render_all<D: CalendarDate>(dates: &[D], pattern: &str) -> RecurResult<Vec<String>> {
    dates
        .iter()
        .map(|date| date.render(pattern).map_err(RecurError::from))
        .collect()
}
