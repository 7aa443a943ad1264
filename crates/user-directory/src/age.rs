//! Age derived from a date of birth.
//!
//! Ages are whole years. A birthday counts as reached on the day itself; a
//! 29 February birthday is therefore not reached until 1 March in common
//! years. A date of birth after the reference date yields a negative age,
//! which is returned as-is rather than clamped.

use chrono::{Datelike, NaiveDate};
use mockable::Clock;

/// Whole years elapsed between `dob` and `as_of`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use user_directory::age;
///
/// let as_of = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
/// let reached = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");
/// let pending = NaiveDate::from_ymd_opt(2000, 6, 15).expect("valid date");
///
/// assert_eq!(age(reached, as_of), 24);
/// assert_eq!(age(pending, as_of), 23);
/// ```
#[must_use]
pub fn age(dob: NaiveDate, as_of: NaiveDate) -> i32 {
    let years = as_of.year() - dob.year();
    if (as_of.month(), as_of.day()) < (dob.month(), dob.day()) {
        years - 1
    } else {
        years
    }
}

/// Age as of the clock's local calendar date.
#[must_use]
pub fn age_on_clock(dob: NaiveDate, clock: &dyn Clock) -> i32 {
    age(dob, clock.local().date_naive())
}
