#![cfg(unix)]

mod common;

use common::{fixtures_dir, parse_events, reference_document};
use liturgy_core::{
    CommandGenerator, GeneratorError, GeneratorRequest, LiturgicalCalendar, ObservanceGenerator,
};

fn request(year: i32) -> GeneratorRequest {
    GeneratorRequest {
        year,
        country: "unitedstates".to_string(),
        locale: "en".to_string(),
    }
}

fn snapshot_cat() -> CommandGenerator {
    CommandGenerator::new(
        "sh",
        vec![
            "-c".to_string(),
            "cat \"$0/{year}.json\"".to_string(),
            fixtures_dir().display().to_string(),
        ],
    )
}

#[test]
fn reads_observances_from_child_stdout() {
    let observances = snapshot_cat().calendar_for(&request(2019)).unwrap();
    assert!(observances.iter().any(|o| o.key == "christmas"));
}

#[test]
fn command_output_renders_like_snapshot() {
    let text = LiturgicalCalendar::new(snapshot_cat())
        .run(Some(2019))
        .unwrap();
    assert_eq!(parse_events(&text), parse_events(&reference_document(2019)));
}

#[test]
fn non_zero_exit_keeps_status_and_stderr() {
    let generator = CommandGenerator::new(
        "sh",
        vec!["-c".to_string(), "echo boom >&2; exit 3".to_string()],
    );
    // Placeholder-free args still get the default flags appended; `sh -c` ignores them.
    match generator.calendar_for(&request(2019)) {
        Err(GeneratorError::CommandFailed { status, stderr, .. }) => {
            assert_eq!(status, Some(3));
            assert!(stderr.contains("boom"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn garbage_output_is_a_parse_error() {
    let generator = CommandGenerator::new(
        "sh",
        vec!["-c".to_string(), "echo not-json".to_string()],
    );
    assert!(matches!(
        generator.calendar_for(&request(2019)),
        Err(GeneratorError::Parse(_))
    ));
}

#[test]
fn missing_program_is_a_spawn_error() {
    let generator = CommandGenerator::new("liturgy-generator-that-does-not-exist", Vec::new());
    assert!(matches!(
        generator.calendar_for(&request(2019)),
        Err(GeneratorError::Spawn { .. })
    ));
}
