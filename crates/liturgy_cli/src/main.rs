//! `liturgical-calendar` entry point.
//!
//! # Responsibility
//! - Read the optional year argument and environment configuration.
//! - Print the rendered iCalendar document to stdout.
//!
//! # Exit codes
//! - 0: document printed
//! - 1: configuration or generator failure

use clap::Parser;
use liturgy_core::{init_logging, LiturgicalCalendar, RuntimeConfig};
use log::warn;
use std::process::ExitCode;

/// Print the parish liturgical calendar for a year as iCalendar.
#[derive(Parser, Debug)]
#[command(name = "liturgical-calendar", version)]
struct Cli {
    /// Calendar year; defaults to the current year.
    year: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match RuntimeConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(config.log_level, config.log_dir.as_deref()) {
        eprintln!("warning: logging disabled: {err}");
    }

    let year = parse_year(cli.year.as_deref());
    let calendar = LiturgicalCalendar::new(config.source.into_generator())
        .with_region(config.region);

    match calendar.run(year) {
        Ok(document) => {
            print!("{document}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Parses the year argument; anything non-numeric falls back to the default year.
fn parse_year(raw: Option<&str>) -> Option<i32> {
    let raw = raw?;
    match raw.trim().parse::<i32>() {
        Ok(year) => Some(year),
        Err(_) => {
            warn!("event=year_arg_ignored module=cli status=error value={raw:?}");
            None
        }
    }
}
