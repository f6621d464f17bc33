//! Runtime configuration for the calendar command.
//!
//! # Responsibility
//! - Resolve which generator adapter to use and how to log.
//! - Hold the fixed country/locale the parish calendar is built for.
//!
//! # Invariants
//! - Region is not configurable from the environment.
//! - A snapshot directory takes precedence over a generator command.

use crate::generator::{CommandGenerator, ObservanceGenerator, SnapshotGenerator};
use crate::logging::{default_log_level, normalize_level, normalize_log_dir};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_SNAPSHOT_DIR: &str = "LITURGY_SNAPSHOT_DIR";
pub const ENV_GENERATOR_CMD: &str = "LITURGY_GENERATOR_CMD";
pub const ENV_LOG_LEVEL: &str = "LITURGY_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "LITURGY_LOG_DIR";

pub const DEFAULT_COUNTRY: &str = "unitedstates";
pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_GENERATOR_PROGRAM: &str = "romcal";

/// Country/locale pair requested from the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub country: String,
    pub locale: String,
}

impl Default for Region {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

/// Where observances come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorSource {
    Snapshot(PathBuf),
    Command { program: String, args: Vec<String> },
}

impl GeneratorSource {
    /// Builds the generator adapter for this source.
    pub fn into_generator(self) -> Box<dyn ObservanceGenerator> {
        match self {
            Self::Snapshot(dir) => Box::new(SnapshotGenerator::new(dir)),
            Self::Command { program, args } => Box::new(CommandGenerator::new(program, args)),
        }
    }
}

impl Default for GeneratorSource {
    fn default() -> Self {
        Self::Command {
            program: DEFAULT_GENERATOR_PROGRAM.to_string(),
            args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub region: Region,
    pub source: GeneratorSource,
    pub log_level: &'static str,
    /// Absolute directory for rotating log files; stderr when `None`.
    pub log_dir: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            region: Region::default(),
            source: GeneratorSource::default(),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl RuntimeConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(dir) = read(ENV_SNAPSHOT_DIR) {
            config.source = GeneratorSource::Snapshot(PathBuf::from(dir));
        } else if let Some(command) = read(ENV_GENERATOR_CMD) {
            let mut parts = command.split_whitespace().map(str::to_string);
            let program = parts.next().ok_or(ConfigError::EmptyCommand)?;
            config.source = GeneratorSource::Command {
                program,
                args: parts.collect(),
            };
        }

        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = normalize_level(&level).map_err(ConfigError::InvalidLogLevel)?;
        }

        if let Some(dir) = read(ENV_LOG_DIR) {
            normalize_log_dir(&dir).map_err(ConfigError::InvalidLogDir)?;
            config.log_dir = Some(dir);
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    InvalidLogDir(String),
    EmptyCommand,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(message) => write!(f, "{ENV_LOG_LEVEL}: {message}"),
            Self::InvalidLogDir(message) => write!(f, "{ENV_LOG_DIR}: {message}"),
            Self::EmptyCommand => write!(f, "{ENV_GENERATOR_CMD} must name a program"),
        }
    }
}

impl Error for ConfigError {}
