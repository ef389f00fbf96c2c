//! Browser bindings for the record-form calculators.
//!
//! Each function takes the raw date-picker strings and returns a JSON string,
//! or `undefined` when the dates are missing, malformed or reversed so the
//! form can show its placeholder.

use vital_calc::{compute_age_at_event, compute_calendar_duration, parse_optional_form_date};
use wasm_bindgen::prelude::*;

/// Age at an event, e.g. `{"magnitude":3,"unit":"years"}`.
#[wasm_bindgen(js_name = ageAtEvent)]
pub fn age_at_event(start: &str, end: &str) -> Option<String> {
    let start = parse_optional_form_date(start)?;
    let end = parse_optional_form_date(end)?;
    let age = compute_age_at_event(start, end)?;
    serde_json::to_string(&age).ok()
}

/// Calendar duration, e.g. `{"years":7,"months":9,"days":16}`.
#[wasm_bindgen(js_name = calendarDuration)]
pub fn calendar_duration(start: &str, end: &str) -> Option<String> {
    let start = parse_optional_form_date(start)?;
    let end = parse_optional_form_date(end)?;
    let duration = compute_calendar_duration(start.date(), end.date())?;
    serde_json::to_string(&duration).ok()
}

/// Human-readable calendar duration, e.g. `"7 years, 9 months, 16 days"`.
#[wasm_bindgen(js_name = calendarDurationDisplay)]
pub fn calendar_duration_display(start: &str, end: &str) -> Option<String> {
    let start = parse_optional_form_date(start)?;
    let end = parse_optional_form_date(end)?;
    compute_calendar_duration(start.date(), end.date()).map(|d| d.to_string())
}
