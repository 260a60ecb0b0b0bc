use super::*;

#[test]
fn patch_engine_matches_scanner_on_well_formed_exports() {
    let arcs = r#"{"arcs":[new Arc([1,2],3,0,6.28),new Arc([4,5],6,0,3.14),]}"#;
    let a = crate::repair_arcs(arcs, &patch_opts()).unwrap();
    let b = crate::repair_arcs(arcs, &opts()).unwrap();
    assert_eq!(a, b);

    let objs = r#"{"id":1}{"id":2}{"id":3}"#;
    let a = crate::join_features(objs, &patch_opts()).unwrap();
    let b = crate::join_features(objs, &opts()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.count, 3);
}

#[test]
fn patch_engine_needs_trailing_comma_after_last_arc() {
    let s = r#"{"arcs":[new Arc(1,2,3,0,6.28)]}"#;
    let err = crate::repair_arcs(s, &patch_opts()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Parse);
    // the scanner handles the same input
    assert!(crate::repair_arcs(s, &opts()).is_ok());
}

#[test]
fn patch_engine_rewrites_braces_inside_strings() {
    let s = r#"{"s":"}{"}"#;
    let patched = crate::join_features(s, &patch_opts()).unwrap();
    assert_eq!(patched.value["features"][0]["s"], "},{");
    let scanned = crate::join_features(s, &opts()).unwrap();
    assert_eq!(scanned.value["features"][0]["s"], "}{");
}

#[test]
fn patch_engine_rejects_whitespace_between_objects() {
    let s = "{\"a\":1}\n{\"a\":2}";
    assert!(crate::join_features(s, &patch_opts()).is_err());
    assert_eq!(crate::join_features(s, &opts()).unwrap().count, 2);
}
