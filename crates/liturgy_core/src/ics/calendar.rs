//! Minimal RFC 5545 calendar writer.
//!
//! # Responsibility
//! - Hold `VCALENDAR`/`VEVENT` components with whole-day start dates.
//! - Render content lines with escaping and 75-octet folding.
//!
//! # Invariants
//! - Every line ends with CRLF.
//! - Folding never splits a UTF-8 sequence.

use chrono::NaiveDate;
use std::fmt::{Display, Formatter, Write};
use uuid::Uuid;

pub const DEFAULT_PRODID: &str = "-//liturgy//Parish Liturgical Calendar//EN";

const MAX_LINE_OCTETS: usize = 75;

/// `VCALENDAR` container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    prodid: String,
    events: Vec<Event>,
}

impl Calendar {
    pub fn new(prodid: impl Into<String>) -> Self {
        Self {
            prodid: prodid.into(),
            events: Vec::new(),
        }
    }

    /// Appends one event; rendering keeps insertion order.
    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(DEFAULT_PRODID)
    }
}

/// `VEVENT` component for a whole-day observance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub uid: Uuid,
    pub start: NaiveDate,
    pub summary: String,
    pub description: Option<String>,
}

impl Event {
    pub fn new(uid: Uuid, start: NaiveDate, summary: impl Into<String>) -> Self {
        Self {
            uid,
            start,
            summary: summary.into(),
            description: None,
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }
}

impl Display for Calendar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_line(f, "BEGIN:VCALENDAR")?;
        write_line(f, "VERSION:2.0")?;
        write_line(f, &format!("PRODID:{}", escape_text(&self.prodid)))?;
        write_line(f, "CALSCALE:GREGORIAN")?;
        for event in &self.events {
            write!(f, "{event}")?;
        }
        write_line(f, "END:VCALENDAR")
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let date = self.start.format("%Y%m%d");
        write_line(f, "BEGIN:VEVENT")?;
        write_line(f, &format!("UID:{}", self.uid))?;
        // Stamped from the event date so repeated runs only differ by UID.
        write_line(f, &format!("DTSTAMP:{date}T000000Z"))?;
        write_line(f, &format!("DTSTART;VALUE=DATE:{date}"))?;
        write_line(f, &format!("SUMMARY:{}", escape_text(&self.summary)))?;
        if let Some(description) = &self.description {
            write_line(f, &format!("DESCRIPTION:{}", escape_text(description)))?;
        }
        write_line(f, "END:VEVENT")
    }
}

/// Escapes a TEXT value (RFC 5545 §3.3.11).
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}

/// Folds one content line into CRLF-terminated physical lines.
pub fn fold_line(line: &str) -> String {
    let mut folded = String::with_capacity(line.len() + 8);
    let mut octets = 0;
    for c in line.chars() {
        let width = c.len_utf8();
        if octets + width > MAX_LINE_OCTETS {
            folded.push_str("\r\n ");
            // The leading space counts towards the continuation line.
            octets = 1;
        }
        folded.push(c);
        octets += width;
    }
    folded.push_str("\r\n");
    folded
}

fn write_line(out: &mut impl Write, line: &str) -> std::fmt::Result {
    out.write_str(&fold_line(line))
}
