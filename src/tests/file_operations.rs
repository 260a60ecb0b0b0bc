use super::*;
use crate::cli::{Invocation, Tool, execute};
use std::fs;
use tempfile::tempdir;

fn invocation(dir: &std::path::Path, input: &str, opts: Options) -> Invocation {
    let inp = dir.join("in.json");
    fs::write(&inp, input).unwrap();
    Invocation {
        input: inp,
        output: dir.join("out.json"),
        opts,
    }
}

#[test]
fn execute_arc_repair_writes_output_file() {
    let dir = tempdir().unwrap();
    let inv = invocation(dir.path(), r#"{"arcs":[new Arc(1,2,3,0,6.28),]}"#, opts());
    execute(Tool::ArcRepair, &inv).unwrap();
    let s = fs::read_to_string(&inv.output).unwrap();
    assert_eq!(s, r#"{"arcs":[{"position":["1,2"],"radius":"3","alpha":"0","omega":"6.28"}]}"#);
}

#[test]
fn execute_overwrites_existing_output() {
    let dir = tempdir().unwrap();
    let inv = invocation(dir.path(), r#"{"a":1}{"a":2}"#, opts());
    fs::write(&inv.output, "stale content that is longer than the result").unwrap();
    execute(Tool::FeatureJoiner, &inv).unwrap();
    let s = fs::read_to_string(&inv.output).unwrap();
    assert_eq!(s, r#"{"features":[{"a":1},{"a":2}]}"#);
}

#[test]
fn execute_truncator_with_limit() {
    let dir = tempdir().unwrap();
    let o = Options {
        feature_limit: 1,
        ..Default::default()
    };
    let inv = invocation(dir.path(), r#"{"features":[{"id":1},{"id":2}]}"#, o);
    execute(Tool::FeatureTruncator, &inv).unwrap();
    let v: Value = serde_json::from_str(&fs::read_to_string(&inv.output).unwrap()).unwrap();
    assert_eq!(v, serde_json::json!({"features": [{"id": 1}]}));
}

#[test]
fn missing_input_is_io_error() {
    let dir = tempdir().unwrap();
    let inv = Invocation {
        input: dir.path().join("does-not-exist.json"),
        output: dir.path().join("out.json"),
        opts: opts(),
    };
    let err = execute(Tool::FeatureTruncator, &inv).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Io);
    assert!(!inv.output.exists());
}

#[test]
fn failed_transform_leaves_no_output() {
    let dir = tempdir().unwrap();
    let inv = invocation(dir.path(), "{\"arcs\":[new Arc(1,2)]}", opts());
    let err = execute(Tool::ArcRepair, &inv).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Schema);
    assert!(!inv.output.exists());
}

#[test]
fn unwritable_output_is_io_error() {
    let dir = tempdir().unwrap();
    let mut inv = invocation(dir.path(), "{\"a\":1}", opts());
    inv.output = dir.path().join("missing-dir").join("out.json");
    let err = execute(Tool::FeatureJoiner, &inv).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Io);
}
