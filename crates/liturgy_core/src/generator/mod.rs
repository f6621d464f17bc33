//! Boundary to the external liturgical-calendar generator.
//!
//! # Responsibility
//! - Define the request/response contract with the generator.
//! - Provide adapters for saved generator output and a generator process.
//!
//! # Invariants
//! - Adapters return observances in the generator's native order.
//! - Adapters never filter or rename; curation happens downstream.

use crate::model::observance::RawObservance;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod command;
mod snapshot;

pub use command::CommandGenerator;
pub use snapshot::SnapshotGenerator;

pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// One calendar request sent to the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorRequest {
    pub year: i32,
    pub country: String,
    pub locale: String,
}

/// Produces the exhaustive observance list for one year and locale.
pub trait ObservanceGenerator {
    fn calendar_for(&self, request: &GeneratorRequest) -> GeneratorResult<Vec<RawObservance>>;
}

impl<G: ObservanceGenerator + ?Sized> ObservanceGenerator for &G {
    fn calendar_for(&self, request: &GeneratorRequest) -> GeneratorResult<Vec<RawObservance>> {
        (**self).calendar_for(request)
    }
}

impl<G: ObservanceGenerator + ?Sized> ObservanceGenerator for Box<G> {
    fn calendar_for(&self, request: &GeneratorRequest) -> GeneratorResult<Vec<RawObservance>> {
        (**self).calendar_for(request)
    }
}

/// Generator-boundary failures.
#[derive(Debug)]
pub enum GeneratorError {
    /// No saved output exists for the requested year.
    SnapshotMissing { path: PathBuf, year: i32 },
    Io(std::io::Error),
    /// Generator output is not a valid observance list.
    Parse(serde_json::Error),
    /// Generator process could not be started.
    Spawn {
        program: String,
        source: std::io::Error,
    },
    /// Generator process exited unsuccessfully.
    CommandFailed {
        program: String,
        status: Option<i32>,
        stderr: String,
    },
}

impl Display for GeneratorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SnapshotMissing { path, year } => write!(
                f,
                "no generator snapshot for {year} at `{}`",
                path.display()
            ),
            Self::Io(err) => write!(f, "{err}"),
            Self::Parse(err) => write!(f, "invalid generator output: {err}"),
            Self::Spawn { program, source } => {
                write!(f, "failed to start generator `{program}`: {source}")
            }
            Self::CommandFailed {
                program,
                status,
                stderr,
            } => match status {
                Some(code) => write!(f, "generator `{program}` exited with {code}: {stderr}"),
                None => write!(f, "generator `{program}` was terminated: {stderr}"),
            },
        }
    }
}

impl Error for GeneratorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SnapshotMissing { .. } => None,
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Spawn { source, .. } => Some(source),
            Self::CommandFailed { .. } => None,
        }
    }
}

impl From<std::io::Error> for GeneratorError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for GeneratorError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
