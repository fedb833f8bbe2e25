use super::*;
use std::fs;
use tempfile::tempdir;

fn lines() -> Vec<String> {
    vec!["COMPANY_ID=acme".to_string(), "APP_ID=1:1:android:a".to_string()]
}

#[test]
fn test_emit_without_accumulator() {
    let sink = OutputSink::new(None);
    let mut out = Vec::new();

    sink.emit_to(&mut out, &lines()).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "COMPANY_ID=acme\nAPP_ID=1:1:android:a\n"
    );
}

#[test]
fn test_emit_appends_to_accumulator() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("github_output");
    fs::write(&path, "EARLIER=1\n").unwrap();

    let sink = OutputSink::new(Some(path.clone()));
    let mut out = Vec::new();
    sink.emit_to(&mut out, &lines()).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "EARLIER=1\nCOMPANY_ID=acme\nAPP_ID=1:1:android:a\n"
    );
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "COMPANY_ID=acme\nAPP_ID=1:1:android:a\n"
    );
}

#[test]
fn test_emit_creates_accumulator() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("new_output");

    let sink = OutputSink::new(Some(path.clone()));
    sink.emit_to(&mut Vec::new(), &lines()).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "COMPANY_ID=acme\nAPP_ID=1:1:android:a\n"
    );
}

#[test]
fn test_unwritable_accumulator_is_not_fatal() {
    let dir = tempdir().unwrap();
    // A directory cannot be opened for appending
    let sink = OutputSink::new(Some(dir.path().to_path_buf()));
    let mut out = Vec::new();

    sink.emit_to(&mut out, &lines()).unwrap();

    assert!(String::from_utf8(out).unwrap().contains("COMPANY_ID=acme"));
}
