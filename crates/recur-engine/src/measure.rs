//! The calendar granularities a rule can match against.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RecurError;

/// Whether a measure counts steps from the anchor or projects a calendar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureKind {
    Interval,
    Calendar,
}

/// Calendar granularity of a rule.
///
/// Serialized with the canonical camelCase names; singular forms are
/// accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Measure {
    #[serde(alias = "day")]
    Days,
    #[serde(alias = "week")]
    Weeks,
    #[serde(alias = "month")]
    Months,
    #[serde(alias = "year")]
    Years,
    #[serde(alias = "dayOfWeek")]
    DaysOfWeek,
    #[serde(alias = "dayOfMonth")]
    DaysOfMonth,
    #[serde(alias = "weekOfMonth")]
    WeeksOfMonth,
    #[serde(alias = "weekOfMonthByDay")]
    WeeksOfMonthByDay,
    #[serde(alias = "weeksOfYear")]
    WeekOfYear,
    #[serde(alias = "monthOfYear")]
    MonthsOfYear,
}

impl Measure {
    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
            Self::Years => "years",
            Self::DaysOfWeek => "daysOfWeek",
            Self::DaysOfMonth => "daysOfMonth",
            Self::WeeksOfMonth => "weeksOfMonth",
            Self::WeeksOfMonthByDay => "weeksOfMonthByDay",
            Self::WeekOfYear => "weekOfYear",
            Self::MonthsOfYear => "monthsOfYear",
        }
    }

    /// Returns the singular alias.
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Days => "day",
            Self::Weeks => "week",
            Self::Months => "month",
            Self::Years => "year",
            Self::DaysOfWeek => "dayOfWeek",
            Self::DaysOfMonth => "dayOfMonth",
            Self::WeeksOfMonth => "weekOfMonth",
            Self::WeeksOfMonthByDay => "weekOfMonthByDay",
            Self::WeekOfYear => "weeksOfYear",
            Self::MonthsOfYear => "monthOfYear",
        }
    }

    /// Parses a canonical or singular measure name (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        Self::all().into_iter().find(|measure| {
            trimmed.eq_ignore_ascii_case(measure.as_str())
                || trimmed.eq_ignore_ascii_case(measure.singular())
        })
    }

    #[must_use]
    pub const fn kind(self) -> MeasureKind {
        match self {
            Self::Days | Self::Weeks | Self::Months | Self::Years => MeasureKind::Interval,
            Self::DaysOfWeek
            | Self::DaysOfMonth
            | Self::WeeksOfMonth
            | Self::WeeksOfMonthByDay
            | Self::WeekOfYear
            | Self::MonthsOfYear => MeasureKind::Calendar,
        }
    }

    #[must_use]
    pub const fn is_interval(self) -> bool {
        matches!(self.kind(), MeasureKind::Interval)
    }

    /// Values a committed unit may take for this measure.
    #[must_use]
    pub const fn unit_range(self) -> RangeInclusive<i64> {
        match self {
            Self::Days | Self::Weeks | Self::Months | Self::Years => 1..=i64::MAX,
            Self::DaysOfWeek => 0..=6,
            Self::DaysOfMonth => 1..=31,
            Self::WeeksOfMonth => 0..=5,
            Self::WeeksOfMonthByDay => 0..=4,
            Self::WeekOfYear => 1..=53,
            Self::MonthsOfYear => 0..=11,
        }
    }

    /// Returns all measures in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 10] {
        [
            Self::Days,
            Self::Weeks,
            Self::Months,
            Self::Years,
            Self::DaysOfWeek,
            Self::DaysOfMonth,
            Self::WeeksOfMonth,
            Self::WeeksOfMonthByDay,
            Self::WeekOfYear,
            Self::MonthsOfYear,
        ]
    }
}

impl FromStr for Measure {
    type Err = RecurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RecurError::UnknownMeasure(s.to_string()))
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
