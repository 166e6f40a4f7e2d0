//! Recurrence-rule engine.
//!
//! A [`Recurrence`] combines an anchor date, an optional `[start, end]`
//! window, a [`RuleSet`] and exception dates. Rules are attached fluently:
//!
//! ```
//! use recur_engine::Recurrence;
//!
//! # fn main() -> recur_engine::RecurResult<()> {
//! let mut recurrence: Recurrence = Recurrence::new("2020-01-01")?;
//! recurrence.every(2)?.days()?;
//!
//! assert!(recurrence.matches("2020-01-03")?);
//! assert_eq!(recurrence.next_formatted(2, "%Y-%m-%d")?, ["2020-01-03", "2020-01-05"]);
//! # Ok(())
//! # }
//! ```
//!
//! Units within one rule combine with OR; separate rules combine with AND.
//! The engine is generic over [`recur_core::CalendarDate`] and defaults to
//! `chrono::NaiveDate`.

pub mod error;
pub mod matcher;
pub mod measure;
pub mod options;
pub mod recurrence;
pub mod rule;
pub mod rule_set;
pub mod units;

pub use error::{RecurError, RecurResult};
pub use measure::{Measure, MeasureKind};
pub use options::{RecurrenceOptions, RuleOptions};
pub use recurrence::{Direction, Occurrences, PendingRule, Recurrence};
pub use rule::Rule;
pub use rule_set::RuleSet;
pub use units::{UnitToken, Units, UnitsInput};
