use recur_core::error::CoreError;
use thiserror::Error;

use crate::measure::Measure;

pub const MISSING_DAYS_OF_WEEK: &str = "weeksOfMonthByDay must be combined with daysOfWeek";
pub const START_AFTER_END: &str = "Start date cannot be later than end date.";

/// Recurrence engine errors
#[derive(Error, Debug)]
pub enum RecurError {
    /// Rule combination that cannot be evaluated.
    #[error("{0}")]
    Configuration(&'static str),

    /// Window whose start lies after its end.
    #[error("{0}")]
    Range(&'static str),

    #[error("Cannot enumerate all occurrences without an end date")]
    Unbounded,

    #[error("No occurrence found within {limit} consecutive days")]
    ScanLimitExceeded { limit: u32 },

    #[error("Unknown measure: {0}")]
    UnknownMeasure(String),

    #[error("Invalid units for {measure}: {reason}")]
    InvalidUnits { measure: Measure, reason: String },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type RecurResult<T> = std::result::Result<T, RecurError>;
