//! Shared foundations for the recur workspace.
//!
//! Holds the calendar date capability the engine is generic over, the
//! weekday/month name tables, configuration loading and the core error type.

pub mod config;
pub mod constants;
pub mod date;
pub mod error;
pub mod token;

pub use date::{CalendarDate, DateInput, DateUnit};
pub use error::{CoreError, CoreResult};
pub use token::{Month, Weekday};
