//! Derived-field assignment for the death and divorce record forms.
//!
//! The calculators in [`crate::calculator`] only return values. The form
//! types here own the fields those values land in, and are the only place
//! that writes or clears them. Every setter recomputes immediately, so the
//! derived fields always agree with the current date inputs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::{
    compute_age_at_event_with_policy, compute_calendar_duration, AgeAtEvent, AgeUnit,
    CalendarDuration,
};
use crate::input::parse_optional_form_date;
use crate::policy::AgePolicy;

/// Text shown in place of a derived value when no result can be computed.
pub const PLACEHOLDER: &str = "Enter valid dates to calculate";

// ── DeathForm ───────────────────────────────────────────────────────────────

/// The date and age fields of a death record form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeathForm {
    /// Raw date-picker value for the deceased's date of birth.
    pub date_of_birth: String,
    /// Raw date-picker value for the date of death.
    pub date_of_death: String,
    /// Derived: age magnitude.
    pub age_at_death: Option<u32>,
    /// Derived: unit of `age_at_death`.
    pub age_type: Option<AgeUnit>,
}

impl DeathForm {
    /// Compute the age from the current date fields without touching the form.
    pub fn derived_age(&self, policy: &AgePolicy) -> Option<AgeAtEvent> {
        let birth = parse_optional_form_date(&self.date_of_birth)?;
        let death = parse_optional_form_date(&self.date_of_death)?;
        compute_age_at_event_with_policy(birth, death, policy)
    }

    /// Recompute and assign `age_at_death` and `age_type`.
    ///
    /// Both fields are cleared when the dates are missing, malformed or reversed.
    pub fn recompute(&mut self, policy: &AgePolicy) -> Option<AgeAtEvent> {
        let age = self.derived_age(policy);
        match age {
            Some(age) => {
                self.age_at_death = Some(age.magnitude);
                self.age_type = Some(age.unit);
            }
            None => {
                debug!("death form dates incomplete, clearing age");
                self.age_at_death = None;
                self.age_type = None;
            }
        }
        age
    }

    pub fn set_date_of_birth(&mut self, value: impl Into<String>, policy: &AgePolicy) {
        self.date_of_birth = value.into();
        self.recompute(policy);
    }

    pub fn set_date_of_death(&mut self, value: impl Into<String>, policy: &AgePolicy) {
        self.date_of_death = value.into();
        self.recompute(policy);
    }

    /// The age as shown next to the fields, or [`PLACEHOLDER`].
    pub fn age_display(&self) -> String {
        match (self.age_at_death, self.age_type) {
            (Some(magnitude), Some(unit)) => AgeAtEvent { magnitude, unit }.to_string(),
            _ => PLACEHOLDER.to_string(),
        }
    }
}

// ── DivorceForm ─────────────────────────────────────────────────────────────

/// The date and duration fields of a divorce record form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DivorceForm {
    /// Raw date-picker value for the marriage date.
    pub marriage_date: String,
    /// Raw date-picker value for the divorce date.
    pub divorce_date: String,
    /// Derived and persisted with the record: completed years of marriage.
    pub marriage_duration_years: Option<u32>,
    /// Derived, display only (e.g., "7 years, 9 months, 16 days").
    #[serde(skip)]
    pub duration_display: Option<String>,
}

impl DivorceForm {
    /// Compute the marriage duration from the current date fields.
    pub fn derived_duration(&self) -> Option<CalendarDuration> {
        let married = parse_optional_form_date(&self.marriage_date)?;
        let divorced = parse_optional_form_date(&self.divorce_date)?;
        compute_calendar_duration(married.date(), divorced.date())
    }

    /// Recompute and assign `marriage_duration_years` and `duration_display`.
    pub fn recompute(&mut self) -> Option<CalendarDuration> {
        let duration = self.derived_duration();
        match duration {
            Some(d) => {
                self.marriage_duration_years = Some(d.years);
                self.duration_display = Some(d.to_string());
            }
            None => {
                debug!("divorce form dates incomplete, clearing duration");
                self.marriage_duration_years = None;
                self.duration_display = None;
            }
        }
        duration
    }

    pub fn set_marriage_date(&mut self, value: impl Into<String>) {
        self.marriage_date = value.into();
        self.recompute();
    }

    pub fn set_divorce_date(&mut self, value: impl Into<String>) {
        self.divorce_date = value.into();
        self.recompute();
    }

    /// The duration as shown next to the fields, or [`PLACEHOLDER`].
    pub fn display(&self) -> &str {
        self.duration_display.as_deref().unwrap_or(PLACEHOLDER)
    }
}
