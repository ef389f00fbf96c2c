//! Unit-selection thresholds for the age calculator.
//!
//! The defaults reproduce the registry forms exactly: hours below one day,
//! days below thirty, flat thirty-day months below a year, calendar years
//! from 365 elapsed days on.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VitalError};

/// Thresholds used by [`compute_age_at_event_with_policy`](crate::calculator::compute_age_at_event_with_policy).
///
/// All thresholds are counted in whole elapsed days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgePolicy {
    /// Below this many elapsed days, age is expressed in hours.
    pub hours_below_days: u32,
    /// Below this many elapsed days, age is expressed in days.
    pub days_below_days: u32,
    /// From this many elapsed days on, age is expressed in calendar years.
    pub years_from_days: u32,
    /// Size of one month bucket when age is expressed in months.
    pub days_per_month: u32,
}

impl Default for AgePolicy {
    fn default() -> Self {
        Self {
            hours_below_days: 1,
            days_below_days: 30,
            years_from_days: 365,
            days_per_month: 30,
        }
    }
}

impl AgePolicy {
    /// Check that the thresholds are usable.
    ///
    /// # Errors
    ///
    /// Returns [`VitalError::InvalidPolicy`] if `days_per_month` is zero or the
    /// thresholds are not in non-decreasing order.
    pub fn validate(&self) -> Result<()> {
        if self.days_per_month == 0 {
            return Err(VitalError::InvalidPolicy(
                "days_per_month must be greater than 0".to_string(),
            ));
        }

        if self.hours_below_days > self.days_below_days {
            return Err(VitalError::InvalidPolicy(format!(
                "hours_below_days ({}) cannot be greater than days_below_days ({})",
                self.hours_below_days, self.days_below_days
            )));
        }

        if self.days_below_days > self.years_from_days {
            return Err(VitalError::InvalidPolicy(format!(
                "days_below_days ({}) cannot be greater than years_from_days ({})",
                self.days_below_days, self.years_from_days
            )));
        }

        Ok(())
    }
}
