//! Tag selection: picks the query category for a calendar date.

use chrono::{Datelike, NaiveDate};

/// Category tags sent to the API, in fixed order.
pub const TAGS: [&str; 3] = ["main course", "dinner", "lunch"];

/// Pick the tag for a date.
///
/// Uses the 1-based day-of-year ordinal plus the last digit of the year as a
/// seed, so the tag varies across runs but is deterministic per date. This
/// only biases the query category; it makes no uniqueness or fairness
/// guarantee.
pub fn tag_for_date(date: NaiveDate) -> &'static str {
    let seed = date.ordinal() + date.year().rem_euclid(10) as u32;
    TAGS[(seed % TAGS.len() as u32) as usize]
}
