//! Generator adapter that runs an external generator process.
//!
//! # Invariants
//! - The process must print a JSON array of generator records on stdout.
//! - `{year}`, `{country}` and `{locale}` in arguments are substituted.

use super::{GeneratorError, GeneratorRequest, GeneratorResult, ObservanceGenerator};
use crate::logging::sanitize_message;
use crate::model::observance::RawObservance;
use log::{debug, warn};
use std::process::{Command, Stdio};

const MAX_STDERR_CHARS: usize = 240;
const PLACEHOLDERS: &[&str] = &["{year}", "{country}", "{locale}"];
const DEFAULT_ARGS: &[&str] = &[
    "--year",
    "{year}",
    "--country",
    "{country}",
    "--locale",
    "{locale}",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandGenerator {
    program: String,
    args: Vec<String>,
}

impl CommandGenerator {
    /// Creates an adapter for `program`.
    ///
    /// When no argument carries a placeholder, the request is passed as
    /// `--year {year} --country {country} --locale {locale}`.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        let mut args = args;
        let has_placeholder = args
            .iter()
            .any(|arg| PLACEHOLDERS.iter().any(|p| arg.contains(p)));
        if !has_placeholder {
            args.extend(DEFAULT_ARGS.iter().map(|arg| arg.to_string()));
        }
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the arguments with request values substituted.
    pub fn resolved_args(&self, request: &GeneratorRequest) -> Vec<String> {
        let year = request.year.to_string();
        self.args
            .iter()
            .map(|arg| {
                arg.replace("{year}", &year)
                    .replace("{country}", &request.country)
                    .replace("{locale}", &request.locale)
            })
            .collect()
    }
}

impl ObservanceGenerator for CommandGenerator {
    fn calendar_for(&self, request: &GeneratorRequest) -> GeneratorResult<Vec<RawObservance>> {
        let args = self.resolved_args(request);
        debug!(
            "event=generator_spawn module=generator program={} args={:?}",
            self.program, args
        );

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| GeneratorError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = sanitize_message(
                String::from_utf8_lossy(&output.stderr).trim(),
                MAX_STDERR_CHARS,
            );
            warn!(
                "event=generator_failed module=generator status=error program={} code={:?}",
                self.program,
                output.status.code()
            );
            return Err(GeneratorError::CommandFailed {
                program: self.program.clone(),
                status: output.status.code(),
                stderr,
            });
        }

        let observances: Vec<RawObservance> = serde_json::from_slice(&output.stdout)?;
        Ok(observances)
    }
}
