#![allow(dead_code)]

use std::path::PathBuf;

/// Comparable projection of one `VEVENT`; UIDs are left out on purpose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFields {
    pub dtstart: String,
    pub summary: String,
    pub description: Option<String>,
}

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn reference_document(year: i32) -> String {
    std::fs::read_to_string(fixtures_dir().join(format!("{year}.ics"))).unwrap()
}

/// Extracts the events of an iCalendar document in document order.
pub fn parse_events(document: &str) -> Vec<EventFields> {
    let unfolded = document.replace("\r\n ", "").replace("\r\n\t", "");
    let mut events = Vec::new();
    let mut current: Option<EventFields> = None;

    for line in unfolded.split("\r\n").filter(|line| !line.is_empty()) {
        let (head, value) = line.split_once(':').expect("content line has a colon");
        let name = head.split(';').next().unwrap();
        if name == "BEGIN" && value == "VEVENT" {
            current = Some(EventFields {
                dtstart: String::new(),
                summary: String::new(),
                description: None,
            });
            continue;
        }
        if name == "END" && value == "VEVENT" {
            events.extend(current.take());
            continue;
        }
        let Some(event) = current.as_mut() else {
            continue;
        };
        match name {
            "DTSTART" => event.dtstart = value.to_string(),
            "SUMMARY" => event.summary = unescape(value),
            "DESCRIPTION" => event.description = Some(unescape(value)),
            _ => {}
        }
    }
    events
}

/// Returns every `UID` value in the document.
pub fn uids(document: &str) -> Vec<String> {
    document
        .split("\r\n")
        .filter_map(|line| line.strip_prefix("UID:"))
        .map(str::to_string)
        .collect()
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
