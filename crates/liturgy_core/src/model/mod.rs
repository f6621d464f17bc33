//! Data shapes flowing through the curation pipeline.
//!
//! # Responsibility
//! - Describe generator output (`RawObservance`) as it arrives on the wire.
//! - Describe curated output (`EventRecord`) handed to the formatter.
//!
//! # Invariants
//! - Both types are built once per run and never mutated afterwards.
//! - Nothing in this module is persisted.

pub mod event;
pub mod observance;
