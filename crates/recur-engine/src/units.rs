//! Rule units, before and after normalization.
//!
//! Callers hand `every` numbers, names, or lists mixing both
//! ([`UnitsInput`]). When a rule is committed the input is resolved against
//! its measure into [`Units`]: a non-empty set of integers inside the
//! measure's valid range.

use std::collections::{BTreeMap, BTreeSet};

use recur_core::{Month, Weekday};

use crate::error::{RecurError, RecurResult};
use crate::measure::Measure;

/// A single unit as given by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnitToken {
    Number(i64),
    Name(String),
}

impl UnitToken {
    fn resolve(&self, measure: Measure) -> RecurResult<i64> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Name(name) => {
                if let Ok(value) = name.trim().parse::<i64>() {
                    return Ok(value);
                }
                let resolved = match measure {
                    Measure::DaysOfWeek => Weekday::parse(name).map(Weekday::index),
                    Measure::MonthsOfYear => Month::parse(name).map(Month::index0),
                    _ => {
                        return Err(RecurError::InvalidUnits {
                            measure,
                            reason: format!("names are not accepted, got {name:?}"),
                        });
                    }
                };
                resolved.map(i64::from).ok_or_else(|| RecurError::InvalidUnits {
                    measure,
                    reason: format!("unrecognized name {name:?}"),
                })
            }
        }
    }
}

macro_rules! unit_token_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for UnitToken {
                fn from(value: $ty) -> Self {
                    Self::Number(i64::from(value))
                }
            }
        )*
    };
}

unit_token_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for UnitToken {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl From<String> for UnitToken {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

impl From<Weekday> for UnitToken {
    fn from(value: Weekday) -> Self {
        Self::Number(i64::from(value.index()))
    }
}

impl From<Month> for UnitToken {
    fn from(value: Month) -> Self {
        Self::Number(i64::from(value.index0()))
    }
}

/// Units as passed to `every`, not yet checked against a measure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitsInput(Vec<UnitToken>);

impl UnitsInput {
    #[must_use]
    pub fn tokens(&self) -> &[UnitToken] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// ## Summary
    /// Resolves names and range-checks every unit for `measure`.
    ///
    /// ## Errors
    /// Returns `RecurError::InvalidUnits` if the input is empty, holds a name
    /// the measure does not understand, or holds a value outside the
    /// measure's range.
    pub fn normalize(&self, measure: Measure) -> RecurResult<Units> {
        if self.0.is_empty() {
            return Err(RecurError::InvalidUnits {
                measure,
                reason: "no units given".to_string(),
            });
        }

        let range = measure.unit_range();
        let mut values = BTreeSet::new();
        for token in &self.0 {
            let value = token.resolve(measure)?;
            if !range.contains(&value) {
                let reason = if measure.is_interval() {
                    format!("intervals must be greater than zero, got {value}")
                } else {
                    format!(
                        "value should be in range {} to {}, got {value}",
                        range.start(),
                        range.end()
                    )
                };
                return Err(RecurError::InvalidUnits { measure, reason });
            }
            values.insert(value);
        }

        Ok(Units(values))
    }
}

impl From<UnitToken> for UnitsInput {
    fn from(value: UnitToken) -> Self {
        Self(vec![value])
    }
}

macro_rules! units_input_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for UnitsInput {
                fn from(value: $ty) -> Self {
                    Self(vec![UnitToken::from(value)])
                }
            }
        )*
    };
}

units_input_from_scalar!(i8, i16, i32, i64, u8, u16, u32, &str, String, Weekday, Month);

impl<T: Into<UnitToken>> From<Vec<T>> for UnitsInput {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Into<UnitToken>, const N: usize> From<[T; N]> for UnitsInput {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Into<UnitToken>> FromIterator<T> for UnitsInput {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Normalized, non-empty set of units for one rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Units(BTreeSet<i64>);

impl Units {
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.0.contains(&value)
    }

    /// Membership test for calendar-field values.
    #[must_use]
    pub fn contains_field(&self, value: u32) -> bool {
        self.0.contains(&i64::from(value))
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no units are held. Normalized units never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Mapping form used by exported options: every unit flagged `true`.
    #[must_use]
    pub fn to_flags(&self) -> BTreeMap<i64, bool> {
        self.0.iter().map(|value| (*value, true)).collect()
    }
}
