//! Public API behavior of the log object view

use logcols::format::{capitalize, format_fields, ColumnOptions, FormatError, Layout, LogObject};
use logcols::LogEntry;
use serde::ser::{Error as _, Serializer};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

fn entry(value: Value) -> LogEntry {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be an object, got {other}"),
    }
}

/// Stands in for a value that refers back to itself
struct SelfReferencing;

impl Serialize for SelfReferencing {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(S::Error::custom("circular reference"))
    }
}

#[test]
fn every_key_becomes_a_capitalized_heading() {
    let content = entry(json!({
        "timestamp": "2024-01-01T00:00:00Z",
        "level": "warn",
        "requestId": 42,
        "retry": false,
    }));
    let view = LogObject::default();
    let out = view.columns(Some(&content)).unwrap();
    let heading_line = out.lines().next().unwrap();

    for key in content.keys() {
        assert!(
            heading_line.contains(&capitalize(key)),
            "heading for {key} missing from {heading_line:?}"
        );
    }
}

#[test]
fn embedded_newline_stays_in_its_column() {
    let content = entry(json!({
        "level": "error",
        "stack": "at foo\nat bar",
        "code": 500,
    }));
    let out = LogObject::default().columns(Some(&content)).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3, "heading + two physical lines: {out:?}");

    let stack_column = lines[0].find("Stack").unwrap();
    assert_eq!(lines[1].find("\"at foo"), Some(stack_column));
    assert_eq!(lines[2].find("at bar\""), Some(stack_column));
    // The continuation line carries nothing in the other columns
    assert!(lines[2][..stack_column].trim().is_empty());
    assert!(!lines[1].contains("at bar"));
}

#[test]
fn formatting_does_not_change_the_content() {
    let content = entry(json!({"level": "info", "count": 3, "nested": {"a": [1, 2]}}));
    let before = content.clone();
    let view = LogObject::default();

    let first = view.columns(Some(&content)).unwrap();
    let second = view.columns(Some(&content)).unwrap();

    assert_eq!(content, before);
    assert_eq!(first, second);
    assert!(first.contains(r#"{"a":[1,2]}"#));
}

#[test]
fn unserializable_value_fails_without_output() {
    let mut fields: BTreeMap<&str, Option<SelfReferencing>> = BTreeMap::new();
    fields.insert("level", None);
    fields.insert("parent", Some(SelfReferencing));

    let err = format_fields(&fields, &ColumnOptions::default()).unwrap_err();
    match err {
        FormatError::Serialization { field, .. } => assert_eq!(field.as_deref(), Some("parent")),
        other => panic!("expected serialization error, got {other:?}"),
    }
}

#[test]
fn unserializable_struct_field_fails() {
    #[derive(Serialize)]
    struct Event {
        level: &'static str,
        parent: SelfReferencing,
    }

    let err = LogObject::default()
        .columns_of(&Event {
            level: "info",
            parent: SelfReferencing,
        })
        .unwrap_err();
    assert!(matches!(err, FormatError::Serialization { .. }));
    assert_eq!(err.field(), Some("parent"));
    assert!(err.to_string().contains("circular reference"));
}

#[test]
fn key_value_layout_lists_one_field_per_row() {
    let content = entry(json!({"level": "info", "message": "multi\nline"}));
    let view = LogObject::new(ColumnOptions {
        layout: Layout::KeyValue,
        ..Default::default()
    });
    let out = view.columns(Some(&content)).unwrap();

    assert_eq!(
        out,
        "Key     Value\nlevel   \"info\"\nmessage \"multi\n        line\""
    );
}

#[test]
fn absent_and_empty_content_render_nothing() {
    let view = LogObject::default();
    assert_eq!(view.columns(None).unwrap(), "");
    assert_eq!(view.columns(Some(&LogEntry::new())).unwrap(), "");
}

#[test]
fn crlf_inside_value_is_one_line_break() {
    let content = entry(json!({"level": "info", "trace": "first\r\nsecond"}));
    let out = LogObject::default().columns(Some(&content)).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(!out.contains('\r'));
    assert!(!out.contains("\\r"));
    assert!(lines[1].ends_with("\"first"));
    assert!(lines[2].ends_with("second\""));
}
