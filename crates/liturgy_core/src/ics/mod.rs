//! Calendar-document formatting.
//!
//! # Responsibility
//! - Turn curated records into calendar components with fresh identifiers.
//! - Serialize the document to text.
//!
//! # See also
//! - RFC 5545 (iCalendar)

pub mod calendar;

use crate::model::event::EventRecord;
use calendar::{Calendar, Event, DEFAULT_PRODID};
use uuid::Uuid;

/// Renders an ordered record list into a calendar document.
pub trait CalendarFormatter {
    fn format(&self, records: &[EventRecord]) -> String;
}

/// iCalendar formatter assigning a random UUID to every event.
#[derive(Debug, Clone)]
pub struct IcsFormatter {
    prodid: String,
}

impl IcsFormatter {
    pub fn new() -> Self {
        Self::with_prodid(DEFAULT_PRODID)
    }

    pub fn with_prodid(prodid: impl Into<String>) -> Self {
        Self {
            prodid: prodid.into(),
        }
    }

    /// Builds the calendar component tree without serializing it.
    pub fn build(&self, records: &[EventRecord]) -> Calendar {
        let mut calendar = Calendar::new(self.prodid.clone());
        for record in records {
            let mut event = Event::new(Uuid::new_v4(), record.date, record.summary.clone());
            if let Some(note) = &record.obligation_note {
                event.set_description(note.clone());
            }
            calendar.add_event(event);
        }
        calendar
    }
}

impl Default for IcsFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarFormatter for IcsFormatter {
    fn format(&self, records: &[EventRecord]) -> String {
        self.build(records).to_string()
    }
}
