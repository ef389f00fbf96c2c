//! # vital-calc
//!
//! Derived date fields for civil-registration records.
//!
//! Death records carry an age at death computed from the birth and death
//! dates; divorce records carry a marriage duration computed from the
//! marriage and divorce dates. Both are recomputed whenever either date
//! changes and neither is ever negative.
//!
//! ## Modules
//!
//! - [`calculator`] — age-at-event and calendar-duration computation
//! - [`policy`] — unit-selection thresholds for the age calculator
//! - [`input`] — form date parsing
//! - [`form`] — death and divorce form fields that receive derived values
//! - [`error`] — Error types

pub mod calculator;
pub mod error;
pub mod form;
pub mod input;
pub mod policy;

pub use calculator::{
    compute_age_at_event, compute_age_at_event_with_policy, compute_calendar_duration,
    AgeAtEvent, AgeUnit, CalendarDuration,
};
pub use error::VitalError;
pub use form::{DeathForm, DivorceForm, PLACEHOLDER};
pub use input::{parse_form_date, parse_optional_form_date};
pub use policy::AgePolicy;
