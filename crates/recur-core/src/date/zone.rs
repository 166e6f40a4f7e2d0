//! Reference-zone handling for "today".

use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Returns today's calendar date as observed in the named IANA zone.
///
/// ## Errors
/// Returns `CoreError::InvalidConfiguration` if the zone name is unknown.
pub fn today_in_zone(zone: &str) -> CoreResult<NaiveDate> {
    let tz = Tz::from_str(zone.trim())
        .map_err(|_e| CoreError::InvalidConfiguration(format!("unknown time zone: {zone}")))?;
    let today = Utc::now().with_timezone(&tz).date_naive();
    tracing::trace!(%zone, %today, "Resolved today in reference zone");
    Ok(today)
}
