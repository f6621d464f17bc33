//! Curation engine: one raw observance in, at most one event record out.
//!
//! # Responsibility
//! - Apply the keep/drop decision from the rule tables.
//! - Project kept observances into `EventRecord`s.
//!
//! # Invariants
//! - `curate` is pure; each observance is judged independently.
//! - `curate_all` preserves input order and never re-sorts.

use crate::model::event::{civil_date, EventRecord};
use crate::model::observance::RawObservance;
use crate::rules::{display_name, exclusion_reason, is_included, obligation_note};
use log::debug;

/// Curates one observance, returning `None` when it is rejected.
pub fn curate(observance: &RawObservance) -> Option<EventRecord> {
    if !is_included(observance.kind, &observance.key) {
        return None;
    }
    if exclusion_reason(&observance.key).is_some() {
        return None;
    }

    Some(EventRecord::new(
        display_name(&observance.key, &observance.name),
        civil_date(&observance.moment),
        obligation_note(&observance.key).map(str::to_string),
    ))
}

/// Accepted records plus bookkeeping for one batch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CurationOutcome {
    /// Accepted records in generator order.
    pub records: Vec<EventRecord>,
    pub rejected: usize,
}

/// Curates a whole generator batch in order.
pub fn curate_all(observances: &[RawObservance]) -> CurationOutcome {
    let mut outcome = CurationOutcome::default();
    for observance in observances {
        match curate(observance) {
            Some(record) => outcome.records.push(record),
            None => {
                outcome.rejected += 1;
                debug!(
                    "event=observance_rejected module=curation key={} type={:?} reason={}",
                    observance.key,
                    observance.kind,
                    rejection_label(observance)
                );
            }
        }
    }
    outcome
}

fn rejection_label(observance: &RawObservance) -> String {
    if !is_included(observance.kind, &observance.key) {
        return "rank".to_string();
    }
    match exclusion_reason(&observance.key) {
        Some(reason) => format!("{reason:?}"),
        None => "unknown".to_string(),
    }
}
