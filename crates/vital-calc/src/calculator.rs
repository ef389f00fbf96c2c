//! Elapsed-time calculators for derived record fields.
//!
//! Both calculators are pure functions of two dates. They never read the
//! system clock and never hold state between calls, so a form can call them
//! again on every keystroke or date-pick.
//!
//! # Functions
//!
//! - [`compute_age_at_event`] — age at death, auto-scaled to hours, days, months or years
//! - [`compute_calendar_duration`] — marriage duration as a years/months/days triple
//!
//! # Reversed ranges
//!
//! When the end date precedes the start date neither function produces a
//! value. The caller shows a neutral placeholder; nothing is raised or
//! reported.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::policy::AgePolicy;

const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

// ── AgeUnit ─────────────────────────────────────────────────────────────────

/// The unit an age is expressed in.
///
/// Variants are ordered from finest to coarsest, so `Hours < Years`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeUnit {
    Hours,
    Days,
    Months,
    Years,
}

impl AgeUnit {
    /// The form option value (`"hours"`, `"days"`, `"months"`, `"years"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeUnit::Hours => "hours",
            AgeUnit::Days => "days",
            AgeUnit::Months => "months",
            AgeUnit::Years => "years",
        }
    }

    /// Singular or plural noun for `magnitude` (e.g., "1 day", "2 days").
    fn noun(&self, magnitude: u32) -> &'static str {
        match (self, magnitude) {
            (AgeUnit::Hours, 1) => "hour",
            (AgeUnit::Days, 1) => "day",
            (AgeUnit::Months, 1) => "month",
            (AgeUnit::Years, 1) => "year",
            _ => self.as_str(),
        }
    }
}

impl fmt::Display for AgeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── compute_age_at_event ────────────────────────────────────────────────────

/// An age expressed as a single magnitude in an auto-selected unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgeAtEvent {
    /// Whole units elapsed (always floored).
    pub magnitude: u32,
    /// The unit `magnitude` is counted in.
    pub unit: AgeUnit,
}

impl fmt::Display for AgeAtEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit.noun(self.magnitude))
    }
}

/// Compute the age at an event (e.g., age at death) with the default policy.
///
/// See [`compute_age_at_event_with_policy`] for the unit-selection rules.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use vital_calc::{compute_age_at_event, AgeUnit};
///
/// let birth = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let death = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(0, 0, 0).unwrap();
///
/// let age = compute_age_at_event(birth, death).unwrap();
/// assert_eq!(age.magnitude, 2);
/// assert_eq!(age.unit, AgeUnit::Months);
/// ```
pub fn compute_age_at_event(start: NaiveDateTime, end: NaiveDateTime) -> Option<AgeAtEvent> {
    compute_age_at_event_with_policy(start, end, &AgePolicy::default())
}

/// Compute the age at an event, choosing the coarsest legible unit.
///
/// With `elapsed_days = floor((end - start) / 1 day)`, rules are evaluated in order:
///
/// 1. `elapsed_days < hours_below_days` → whole hours elapsed
/// 2. `elapsed_days < days_below_days` → `elapsed_days`
/// 3. `elapsed_days < years_from_days` → `floor(elapsed_days / days_per_month)` months
///    (flat buckets, not calendar months)
/// 4. otherwise → completed calendar years: the year difference, less one if the
///    anniversary has not yet been reached in the end year
///
/// # Returns
///
/// `None` when `end` precedes `start`, or when the magnitude does not fit a `u32`
/// or `days_per_month` is zero.
pub fn compute_age_at_event_with_policy(
    start: NaiveDateTime,
    end: NaiveDateTime,
    policy: &AgePolicy,
) -> Option<AgeAtEvent> {
    if end < start {
        trace!(%start, %end, "end precedes start, age not computed");
        return None;
    }

    let elapsed_ms = (end - start).num_milliseconds();
    let elapsed_days = elapsed_ms / MILLIS_PER_DAY;

    let (magnitude, unit) = if elapsed_days < i64::from(policy.hours_below_days) {
        (elapsed_ms / MILLIS_PER_HOUR, AgeUnit::Hours)
    } else if elapsed_days < i64::from(policy.days_below_days) {
        (elapsed_days, AgeUnit::Days)
    } else if elapsed_days < i64::from(policy.years_from_days) {
        let months = elapsed_days.checked_div(i64::from(policy.days_per_month))?;
        (months, AgeUnit::Months)
    } else {
        (
            i64::from(completed_years(start.date(), end.date())),
            AgeUnit::Years,
        )
    };

    let magnitude = u32::try_from(magnitude).ok()?;
    Some(AgeAtEvent { magnitude, unit })
}

// ── compute_calendar_duration ───────────────────────────────────────────────

/// A calendar-accurate elapsed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CalendarDuration {
    /// Completed years.
    pub years: u32,
    /// Completed months beyond `years` (0-11).
    pub months: u32,
    /// Remaining days beyond `months`.
    pub days: u32,
}

impl fmt::Display for CalendarDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}

/// Compute the calendar duration between two dates (e.g., marriage to divorce).
///
/// Standard date subtraction with borrowing: a negative day difference borrows
/// the length of the month preceding `end`'s month, and a negative month
/// difference borrows twelve months from the years. If the start day is past
/// the end of a short borrowed month (Jan 31 → Mar 1), borrowing continues
/// into the month before it so that no component is ever negative.
///
/// # Returns
///
/// `None` when `end` precedes `start`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use vital_calc::compute_calendar_duration;
///
/// let married = NaiveDate::from_ymd_opt(2015, 3, 20).unwrap();
/// let divorced = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
///
/// let duration = compute_calendar_duration(married, divorced).unwrap();
/// assert_eq!((duration.years, duration.months, duration.days), (7, 9, 16));
/// ```
pub fn compute_calendar_duration(start: NaiveDate, end: NaiveDate) -> Option<CalendarDuration> {
    if end < start {
        trace!(%start, %end, "end precedes start, duration not computed");
        return None;
    }

    let mut years = end.year() - start.year();
    let mut months = end.month() as i32 - start.month() as i32;
    let mut days = end.day() as i32 - start.day() as i32;

    // Borrow from the months preceding end's month until days is non-negative.
    let (mut borrow_year, mut borrow_month) = (end.year(), end.month());
    while days < 0 {
        (borrow_year, borrow_month) = previous_month(borrow_year, borrow_month);
        months -= 1;
        days += days_in_month(borrow_year, borrow_month) as i32;
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    Some(CalendarDuration {
        years: u32::try_from(years).ok()?,
        months: u32::try_from(months).ok()?,
        days: u32::try_from(days).ok()?,
    })
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Completed years between two dates. Callers guarantee `end >= start`.
fn completed_years(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut years = end.year() - start.year();
    if (end.month(), end.day()) < (start.month(), start.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Number of days in a given year/month, honoring Gregorian leap years.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn plural(n: u32) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
