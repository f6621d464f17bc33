//! End-to-end driver: generator -> curation -> formatter.
//!
//! # Responsibility
//! - Resolve the requested year, consulting the clock only when absent.
//! - Request the fixed region from the generator and curate in its order.
//! - Hand accepted records to the formatter and return its text verbatim.
//!
//! # Invariants
//! - The driver never re-sorts generator output.
//! - Repeated runs over the same generator output differ only in event UIDs.

use crate::clock::{Clock, SystemClock};
use crate::config::Region;
use crate::curation::curate_all;
use crate::generator::{GeneratorError, GeneratorRequest, ObservanceGenerator};
use crate::ics::{CalendarFormatter, IcsFormatter};
use crate::model::event::EventRecord;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Debug)]
pub enum PipelineError {
    Generator { year: i32, source: GeneratorError },
}

impl Display for PipelineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generator { year, source } => {
                write!(f, "failed to generate observances for {year}: {source}")
            }
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Generator { source, .. } => Some(source),
        }
    }
}

/// Parish calendar driver over injected generator, formatter and clock.
pub struct LiturgicalCalendar<G, F = IcsFormatter, C = SystemClock>
where
    G: ObservanceGenerator,
    F: CalendarFormatter,
    C: Clock,
{
    generator: G,
    formatter: F,
    clock: C,
    region: Region,
}

impl<G: ObservanceGenerator> LiturgicalCalendar<G> {
    /// Creates a driver with the iCalendar formatter and the system clock.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            formatter: IcsFormatter::new(),
            clock: SystemClock,
            region: Region::default(),
        }
    }
}

impl<G, F, C> LiturgicalCalendar<G, F, C>
where
    G: ObservanceGenerator,
    F: CalendarFormatter,
    C: Clock,
{
    pub fn with_formatter<F2: CalendarFormatter>(
        self,
        formatter: F2,
    ) -> LiturgicalCalendar<G, F2, C> {
        LiturgicalCalendar {
            generator: self.generator,
            formatter,
            clock: self.clock,
            region: self.region,
        }
    }

    pub fn with_clock<C2: Clock>(self, clock: C2) -> LiturgicalCalendar<G, F, C2> {
        LiturgicalCalendar {
            generator: self.generator,
            formatter: self.formatter,
            clock,
            region: self.region,
        }
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Returns `year`, or the clock's current year when absent.
    pub fn resolve_year(&self, year: Option<i32>) -> i32 {
        year.unwrap_or_else(|| self.clock.current_year())
    }

    /// Curates every generator observance for the year, in generator order.
    pub fn curate_year(&self, year: Option<i32>) -> PipelineResult<Vec<EventRecord>> {
        let year = self.resolve_year(year);
        let request = GeneratorRequest {
            year,
            country: self.region.country.clone(),
            locale: self.region.locale.clone(),
        };

        let observances = self.generator.calendar_for(&request).map_err(|source| {
            error!(
                "event=calendar_generate module=pipeline status=error year={} country={} locale={}",
                year, request.country, request.locale
            );
            PipelineError::Generator { year, source }
        })?;

        let outcome = curate_all(&observances);
        info!(
            "event=calendar_curate module=pipeline status=ok year={} observed={} accepted={} rejected={}",
            year,
            observances.len(),
            outcome.records.len(),
            outcome.rejected
        );
        Ok(outcome.records)
    }

    /// Renders the curated calendar document for the year.
    pub fn run(&self, year: Option<i32>) -> PipelineResult<String> {
        let records = self.curate_year(year)?;
        Ok(self.formatter.format(&records))
    }
}
