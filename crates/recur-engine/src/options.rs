//! Plain import/export form of a [`Recurrence`].
//!
//! Dates are ISO `YYYY-MM-DD` strings and rule units are a mapping of unit to
//! `true`, e.g.
//!
//! ```json
//! {
//!   "start": "2020-01-01",
//!   "end": "2020-12-31",
//!   "rules": [{ "units": { "2": true }, "measure": "days" }],
//!   "exceptions": ["2020-01-05"]
//! }
//! ```
//!
//! Builder state that has not been committed is never part of this form.

use std::collections::BTreeMap;

use recur_core::CalendarDate;
use serde::{Deserialize, Serialize};

use crate::error::{RecurError, RecurResult};
use crate::measure::Measure;
use crate::recurrence::Recurrence;
use crate::rule::Rule;
use crate::units::UnitsInput;

/// Exported recurrence. Missing fields deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecurrenceOptions {
    /// Only present when the anchor differs from `start`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub rules: Vec<RuleOptions>,
    pub exceptions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOptions {
    pub units: BTreeMap<i64, bool>,
    pub measure: Measure,
}

impl RuleOptions {
    /// Units flagged `true`; `false` entries are ignored.
    fn enabled_units(&self) -> UnitsInput {
        self.units
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(unit, _)| *unit)
            .collect()
    }
}

impl From<&Rule> for RuleOptions {
    fn from(rule: &Rule) -> Self {
        Self {
            units: rule.units().to_flags(),
            measure: rule.measure(),
        }
    }
}

impl RecurrenceOptions {
    /// ## Summary
    /// Parses options from JSON.
    ///
    /// ## Errors
    /// Returns `RecurError::Serialization` if the JSON is malformed or has the
    /// wrong shape.
    pub fn from_json(json: &str) -> RecurResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// ## Summary
    /// Renders options as pretty-printed JSON.
    ///
    /// ## Errors
    /// Returns `RecurError::Serialization` if serialization fails.
    pub fn to_json(&self) -> RecurResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<D: CalendarDate> Recurrence<D> {
    /// Exports the recurrence. Pending builder state is left out.
    #[must_use]
    pub fn save(&self) -> RecurrenceOptions {
        let anchor = (self.start_date() != Some(self.anchor())).then(|| self.anchor().to_string());

        RecurrenceOptions {
            anchor,
            start: self.start_date().map(ToString::to_string),
            end: self.end_date().map(ToString::to_string),
            rules: self.rules().iter().map(RuleOptions::from).collect(),
            exceptions: self.exceptions().iter().map(ToString::to_string).collect(),
        }
    }

    /// ## Summary
    /// Rebuilds a recurrence from exported options. The anchor falls back to
    /// `start`, then to today.
    ///
    /// ## Errors
    /// Returns `RecurError::Core` for a date that does not parse, or
    /// `RecurError::InvalidUnits` for a rule whose units are rejected.
    pub fn from_options(options: &RecurrenceOptions) -> RecurResult<Self> {
        let mut recurrence = match options.anchor.as_deref().or(options.start.as_deref()) {
            Some(anchor) => Self::new(anchor)?,
            None => Self::today(),
        };

        if let Some(start) = options.start.as_deref() {
            recurrence.set_start_date(start)?;
        }
        if let Some(end) = options.end.as_deref() {
            recurrence.set_end_date(end)?;
        }
        for rule in &options.rules {
            recurrence.every_as(rule.enabled_units(), rule.measure)?;
        }
        for exception in &options.exceptions {
            recurrence.except(exception)?;
        }

        tracing::debug!(
            rules = recurrence.rules().len(),
            exceptions = recurrence.exceptions().len(),
            "Loaded recurrence from options"
        );
        Ok(recurrence)
    }
}

impl<D: CalendarDate> TryFrom<&RecurrenceOptions> for Recurrence<D> {
    type Error = RecurError;

    fn try_from(options: &RecurrenceOptions) -> Result<Self, Self::Error> {
        Self::from_options(options)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    const SAVED: &str = r#"{
        "start": "2020-01-01",
        "end": "2020-12-31",
        "rules": [{ "units": { "2": true }, "measure": "days" }],
        "exceptions": ["2020-01-05"]
    }"#;

    #[test]
    fn imports_saved_options() -> RecurResult<()> {
        let options = RecurrenceOptions::from_json(SAVED)?;
        let recurrence: Recurrence<NaiveDate> = Recurrence::from_options(&options)?;

        assert_eq!(recurrence.start_date().map(ToString::to_string).as_deref(), Some("2020-01-01"));
        assert_eq!(recurrence.end_date().map(ToString::to_string).as_deref(), Some("2020-12-31"));
        assert_eq!(recurrence.rules().len(), 1);
        assert_eq!(recurrence.exceptions().len(), 1);
        assert!(recurrence.matches("2020-01-03")?);
        assert!(!recurrence.matches("2020-01-05")?);
        Ok(())
    }

    #[test]
    fn exports_window_rules_and_exceptions() -> RecurResult<()> {
        let mut recurrence: Recurrence<NaiveDate> = Recurrence::between("2020-01-01", "2020-12-31")?;
        recurrence.every_as(2, Measure::Days)?.except("2020-01-05")?;

        let data = recurrence.save();
        assert_eq!(data.anchor, None);
        assert_eq!(data.start.as_deref(), Some("2020-01-01"));
        assert_eq!(data.end.as_deref(), Some("2020-12-31"));
        assert_eq!(data.exceptions, vec!["2020-01-05"]);
        assert_eq!(data.rules[0].units.get(&2), Some(&true));
        assert_eq!(data.rules[0].measure, Measure::Days);

        let json = data.to_json()?;
        assert!(json.contains("\"measure\": \"days\""));
        assert!(!json.contains("anchor"));
        Ok(())
    }

    #[test]
    fn pending_state_is_not_exported() -> RecurResult<()> {
        let mut recurrence: Recurrence<NaiveDate> = Recurrence::new("2020-01-01")?;
        recurrence.every(3)?;

        let data = recurrence.save();
        assert!(data.rules.is_empty());
        assert_eq!(data.anchor.as_deref(), Some("2020-01-01"));
        Ok(())
    }

    #[test]
    fn false_flags_are_ignored() -> RecurResult<()> {
        let options = RecurrenceOptions::from_json(
            r#"{ "start": "2020-01-01", "rules": [{ "units": { "0": true, "1": false }, "measure": "daysOfWeek" }] }"#,
        )?;
        let recurrence: Recurrence<NaiveDate> = Recurrence::try_from(&options)?;

        let rule = recurrence.rules().get(Measure::DaysOfWeek).expect("rule");
        assert_eq!(rule.units().iter().collect::<Vec<_>>(), vec![0]);
        Ok(())
    }

    #[test]
    fn bad_options_are_rejected() {
        assert!(matches!(
            RecurrenceOptions::from_json("{ \"rules\": 3 }"),
            Err(RecurError::Serialization(_))
        ));

        let options = RecurrenceOptions {
            start: Some("yesterday-ish".to_string()),
            ..RecurrenceOptions::default()
        };
        assert!(matches!(
            Recurrence::<NaiveDate>::from_options(&options),
            Err(RecurError::Core(_))
        ));
    }
}
