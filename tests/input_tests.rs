mod utils;

use std::io::Write;

use jsoninput::input::PATH_PROPERTY;
use jsoninput::{InputError, InputHandler};
use serde_json::json;
use tempfile::NamedTempFile;
use utils::{BAD_RUN, RUN_ALPHA, RUN_BETA, RUN_GAMMA, RUN_SCHEMA, init_test_logging, resolved};

// cargo test --test input_tests -- --nocapture

#[test]
fn loaded_records_are_tagged_with_their_resolved_paths() {
    init_test_logging();
    let mut handler = InputHandler::with_schema(RUN_SCHEMA).expect("schema should load");
    let count = handler
        .load_input_files(&[RUN_ALPHA, RUN_BETA], true)
        .expect("batch should load");

    assert_eq!(count, 2);
    for (fixture, record) in [RUN_ALPHA, RUN_BETA].iter().zip(handler.records()) {
        assert_eq!(record[PATH_PROPERTY], json!(resolved(fixture)));
    }
}

#[test]
fn the_returned_count_accumulates_across_calls() {
    let mut handler = InputHandler::with_schema(RUN_SCHEMA).unwrap();
    assert_eq!(handler.load_input_files(&[RUN_ALPHA], true).unwrap(), 1);
    // the second call reports the handler's total, not the per-call count
    assert_eq!(
        handler.load_input_files(&[RUN_BETA, RUN_GAMMA], true).unwrap(),
        3
    );
}

#[test]
fn a_nonconforming_file_aborts_the_rest_of_a_checked_batch() {
    let mut handler = InputHandler::with_schema(RUN_SCHEMA).unwrap();
    handler.load_input_files(&[RUN_ALPHA], true).unwrap();

    let err = handler
        .load_input_files(&[RUN_BETA, BAD_RUN, RUN_GAMMA], true)
        .unwrap_err();
    assert!(matches!(err, InputError::Validation(_)), "got {err:?}");

    // alpha from the first call and beta from before the failure survive;
    // gamma was never reached
    assert_eq!(handler.len(), 2);
    assert_eq!(handler.records()[1]["name"], json!("beta"));
}

#[test]
fn unchecked_loading_keeps_nonconforming_records() {
    let mut handler = InputHandler::with_schema(RUN_SCHEMA).unwrap();
    let count = handler.load_input_files(&[RUN_ALPHA, BAD_RUN], false).unwrap();
    assert_eq!(count, 2);
}

#[test]
fn check_input_never_raises_without_a_schema() {
    let handler = InputHandler::new();
    let record = json!({"name": "alpha", "iterations": 1});
    assert!(!handler.check_input(&record).expect("must not raise"));
    assert!(!handler.input_is_valid(&record));
}

#[test]
fn check_input_propagates_violations() {
    let handler = InputHandler::with_schema(RUN_SCHEMA).unwrap();
    assert!(
        handler
            .check_input(&json!({"name": "alpha", "iterations": 2}))
            .unwrap()
    );

    let err = handler.check_input(&json!({"name": "alpha"})).unwrap_err();
    assert!(matches!(err, InputError::Validation(_)), "got {err:?}");
    assert!(!handler.input_is_valid(&json!({"name": "alpha"})));
}

#[test]
fn checked_loading_without_a_schema_drops_every_record() {
    let mut handler = InputHandler::new();
    let count = handler.load_input_files(&[RUN_ALPHA], true).unwrap();
    assert_eq!(count, 0);
    assert!(handler.is_empty());
}

#[test]
fn handlers_accumulate_independently() {
    let mut first = InputHandler::with_schema(RUN_SCHEMA).unwrap();
    let mut second = InputHandler::with_schema(RUN_SCHEMA).unwrap();

    first.load_input_files(&[RUN_ALPHA], true).unwrap();
    assert_eq!(first.len(), 1);
    assert!(second.is_empty());

    second.load_input_files(&[RUN_BETA], true).unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}

#[test]
fn a_missing_input_file_aborts_the_batch() {
    let mut handler = InputHandler::with_schema(RUN_SCHEMA).unwrap();
    let err = handler
        .load_input_files(&["tests/fixtures/no-such-run.json"], true)
        .unwrap_err();
    assert!(matches!(err, InputError::ReadFile { .. }), "got {err:?}");
    assert!(handler.is_empty());
}

#[test]
fn an_unparseable_input_file_aborts_the_batch() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{{ nope").unwrap();
    file.flush().unwrap();

    let mut handler = InputHandler::with_schema(RUN_SCHEMA).unwrap();
    let err = handler.load_input_files(&[file.path()], true).unwrap_err();
    assert!(matches!(err, InputError::ParseJson { .. }), "got {err:?}");
}

#[test]
fn non_object_documents_are_rejected() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "[1, 2, 3]").unwrap();
    file.flush().unwrap();

    let mut handler = InputHandler::new();
    let err = handler.load_input_files(&[file.path()], false).unwrap_err();
    assert!(matches!(err, InputError::NotAnObject { .. }), "got {err:?}");
}

#[test]
fn required_properties_pass_through_from_the_schema() {
    let handler = InputHandler::with_schema(RUN_SCHEMA).unwrap();
    assert_eq!(handler.required_properties(), vec!["name", "iterations"]);
}

#[test]
fn required_properties_are_empty_without_a_schema() {
    assert!(InputHandler::new().required_properties().is_empty());
}
