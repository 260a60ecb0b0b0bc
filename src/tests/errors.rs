use super::*;

#[test]
fn scanner_errors_show_their_byte_offset() {
    let err = crate::join_features(r#"{"id":1}42"#, &opts()).unwrap_err();
    assert!(err.has_position());
    assert_eq!(err.to_string(), "Unexpected character '4' at position 8");
}

#[test]
fn schema_errors_have_no_position_in_message() {
    let err = crate::truncate_features_str(r#"{"arcs":[]}"#, &opts()).unwrap_err();
    assert!(!err.has_position());
    assert_eq!(err.to_string(), "Missing key \"features\"");

    let err = crate::repair_arcs(r#"{"arcs":[new Arc(1,2)]}"#, &opts()).unwrap_err();
    assert_eq!(err.to_string(), "Arc #0 has 2 fields, expected 5");
}

#[test]
fn serde_errors_carry_line_and_column_instead_of_offset() {
    let err = crate::truncate_features_str("{\n\"features\":[}", &opts()).unwrap_err();
    assert_eq!(err.position, 0);
    let msg = err.to_string();
    assert!(msg.starts_with("serde_json parse error:"));
    assert!(msg.contains("line 2"));
    assert!(!msg.contains("at position"));
}

#[test]
fn io_errors_have_no_position_in_message() {
    let err = FixError::from_io("reading x.json", std::io::Error::other("denied"));
    assert_eq!(err.to_string(), "io error: reading x.json: denied");
    assert_eq!(err.category(), ErrorCategory::Io);
}
