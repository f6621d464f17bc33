//! Raw observance model produced by the liturgical generator.
//!
//! # Responsibility
//! - Mirror the generator's JSON record shape (`key`, `name`, `type`, `moment`).
//! - Classify rank tags into a closed enum with a catch-all.
//!
//! # Invariants
//! - `key` is stable for one (year, locale) pair but repeats across years.
//! - `moment` keeps the generator's offset; callers decide how to collapse it.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Rank/category tag attached to each observance by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObservanceType {
    Solemnity,
    Sunday,
    Triduum,
    HolyWeek,
    Feast,
    Memorial,
    OptMemorial,
    Commemoration,
    Weekday,
    /// Any tag outside the known vocabulary. Treated like an ordinary rank.
    #[serde(other)]
    Other,
}

/// One liturgical day as proposed by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawObservance {
    /// Machine slug, e.g. `goodFriday`.
    pub key: String,
    /// Display name proposed by the generator. Empty when omitted upstream.
    #[serde(default)]
    pub name: String,
    /// Serialized as `type` to match the generator schema.
    #[serde(rename = "type")]
    pub kind: ObservanceType,
    /// Instant of the observance, offset-qualified.
    pub moment: DateTime<FixedOffset>,
}

impl RawObservance {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        kind: ObservanceType,
        moment: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            kind,
            moment,
        }
    }
}
