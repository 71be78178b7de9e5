use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Upper bound for a single day of volunteering, inclusive.
pub const MAX_DAILY_HOURS: f64 = 24.0;

/// Returns `true` when `hours` is in `(0, 24]`.
///
/// NaN and infinities are rejected, as is negative zero.
pub fn validate_volunteer_hours(hours: f64) -> bool {
    hours.is_finite() && hours > 0.0 && hours <= MAX_DAILY_HOURS
}

/// Formats an hour count for display, e.g. `"1 hour"`, `"0.5 hours"`.
///
/// The number is written in its shortest decimal form, never rounded.
pub fn format_volunteer_time(hours: f64) -> String {
    if hours == 1.0 {
        return "1 hour".to_string();
    }

    // -0.0 would otherwise print as "-0"
    let hours = if hours == 0.0 { 0.0 } else { hours };
    format!("{hours} hours")
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VolunteerHoursError {
    #[error("Hours must be a finite number")]
    NotFinite,
    #[error("Hours must be greater than zero, got {0}")]
    NotPositive(f64),
    #[error("Hours cannot exceed {max} in a day, got {0}", max = MAX_DAILY_HOURS)]
    ExceedsDailyLimit(f64),
}

/// A validated quantity of volunteered hours.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct VolunteerHours(f64);

impl VolunteerHours {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for VolunteerHours {
    type Error = VolunteerHoursError;

    fn try_from(hours: f64) -> Result<Self, Self::Error> {
        if !hours.is_finite() {
            return Err(VolunteerHoursError::NotFinite);
        }
        if hours <= 0.0 {
            return Err(VolunteerHoursError::NotPositive(hours));
        }
        if hours > MAX_DAILY_HOURS {
            return Err(VolunteerHoursError::ExceedsDailyLimit(hours));
        }

        Ok(Self(hours))
    }
}

impl fmt::Display for VolunteerHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_volunteer_time(self.0))
    }
}
