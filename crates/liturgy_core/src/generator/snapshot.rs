//! Generator adapter over saved JSON output, one file per year.

use super::{GeneratorError, GeneratorRequest, GeneratorResult, ObservanceGenerator};
use crate::model::observance::RawObservance;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Reads `<dir>/<year>.json`, a JSON array of generator records.
///
/// The directory holds output for a single country/locale; the request's
/// region is not part of the file name.
#[derive(Debug, Clone)]
pub struct SnapshotGenerator {
    dir: PathBuf,
}

impl SnapshotGenerator {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the snapshot path for `year`.
    pub fn path_for(&self, year: i32) -> PathBuf {
        self.dir.join(format!("{year}.json"))
    }
}

impl ObservanceGenerator for SnapshotGenerator {
    fn calendar_for(&self, request: &GeneratorRequest) -> GeneratorResult<Vec<RawObservance>> {
        let path = self.path_for(request.year);
        if !path.is_file() {
            return Err(GeneratorError::SnapshotMissing {
                path,
                year: request.year,
            });
        }

        let reader = BufReader::new(File::open(&path)?);
        let observances: Vec<RawObservance> = serde_json::from_reader(reader)?;
        debug!(
            "event=snapshot_loaded module=generator path={} count={}",
            path.display(),
            observances.len()
        );
        Ok(observances)
    }
}
