//! Parish liturgical calendar core.
//! Curates generator observances into whole-day calendar events.

pub mod clock;
pub mod config;
pub mod curation;
pub mod generator;
pub mod ics;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod rules;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, GeneratorSource, Region, RuntimeConfig};
pub use curation::{curate, curate_all, CurationOutcome};
pub use generator::{
    CommandGenerator, GeneratorError, GeneratorRequest, GeneratorResult, ObservanceGenerator,
    SnapshotGenerator,
};
pub use ics::{CalendarFormatter, IcsFormatter};
pub use logging::{default_log_level, init_logging, logging_status, LogDestination};
pub use model::event::{civil_date, EventRecord};
pub use model::observance::{ObservanceType, RawObservance};
pub use pipeline::{LiturgicalCalendar, PipelineError, PipelineResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
