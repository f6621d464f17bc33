//! Curated event record handed to the calendar formatter.
//!
//! # Invariants
//! - `date` carries no time or offset; observances are whole-day events.
//! - `obligation_note` is `None` when no obligation applies, never empty.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Cleaned display title.
    pub summary: String,
    /// Civil date of the observance.
    pub date: NaiveDate,
    /// Fasting/abstinence or mass-attendance note.
    pub obligation_note: Option<String>,
}

impl EventRecord {
    pub fn new(
        summary: impl Into<String>,
        date: NaiveDate,
        obligation_note: Option<String>,
    ) -> Self {
        Self {
            summary: summary.into(),
            date,
            obligation_note,
        }
    }
}

/// Collapses a generator instant to a civil date.
///
/// Reads the UTC year/month/day of `moment` and discards the offset, so the
/// result never depends on the process timezone.
pub fn civil_date(moment: &DateTime<FixedOffset>) -> NaiveDate {
    moment.naive_utc().date()
}
