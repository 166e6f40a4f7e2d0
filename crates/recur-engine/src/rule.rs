use crate::error::RecurResult;
use crate::measure::Measure;
use crate::units::{Units, UnitsInput};

/// A committed rule: one measure and its normalized units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    measure: Measure,
    units: Units,
}

impl Rule {
    /// ## Summary
    /// Builds a rule, normalizing `units` for `measure`.
    ///
    /// ## Errors
    /// Returns `RecurError::InvalidUnits` if the units are empty, unresolvable
    /// or out of range for the measure.
    pub fn new(measure: Measure, units: &UnitsInput) -> RecurResult<Self> {
        let units = units.normalize(measure)?;
        Ok(Self { measure, units })
    }

    #[must_use]
    pub const fn measure(&self) -> Measure {
        self.measure
    }

    #[must_use]
    pub const fn units(&self) -> &Units {
        &self.units
    }
}
