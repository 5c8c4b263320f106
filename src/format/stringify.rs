//! Value → JSON text
//!
//! Values are rendered as compact JSON. With line breaks preserved, a line feed
//! inside a string is written raw instead of as the `\n` escape so the column
//! layout can keep it as a real break inside the cell. A `\r\n` pair is written
//! raw as well; a carriage return on its own keeps its `\r` escape.

use super::FormatError;
use serde::Serialize;
use serde_json::ser::{CharEscape, CompactFormatter, Formatter};
use std::io;

/// A field name paired with the JSON text of its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub text: String,
}

/// Compact JSON formatter that leaves line breaks unescaped
///
/// Carriage returns are written raw too; [`escape_lone_carriage_returns`]
/// restores the escape for any that do not start a `\r\n` pair.
struct LineBreakFormatter;

impl Formatter for LineBreakFormatter {
    fn write_char_escape<W>(&mut self, writer: &mut W, char_escape: CharEscape) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        match char_escape {
            CharEscape::LineFeed => writer.write_all(b"\n"),
            CharEscape::CarriageReturn => writer.write_all(b"\r"),
            other => CompactFormatter.write_char_escape(writer, other),
        }
    }
}

/// Render one value as JSON text.
///
/// `None` and unit both come out as `null`.
pub fn stringify_value<V>(value: &V, preserve_new_lines: bool) -> Result<String, serde_json::Error>
where
    V: Serialize + ?Sized,
{
    if !preserve_new_lines {
        return serde_json::to_string(value);
    }

    let mut buf = Vec::with_capacity(64);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, LineBreakFormatter);
    value.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    let text = String::from_utf8(buf).map_err(<serde_json::Error as serde::ser::Error>::custom)?;
    Ok(escape_lone_carriage_returns(text))
}

/// Re-escape raw `\r` that is not followed by `\n`.
///
/// Raw carriage returns only come from string contents, never from JSON
/// structure, so rewriting them keeps the text valid JSON.
fn escape_lone_carriage_returns(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }

    let mut out = String::with_capacity(text.len() + 4);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' && chars.peek() != Some(&'\n') {
            out.push_str("\\r");
        } else {
            out.push(c);
        }
    }
    out
}

/// Render every field of a mapping into a new list of [`Field`]s.
///
/// The source mapping is only borrowed. The first value that fails to
/// serialize aborts the whole call.
pub fn stringify_fields<I, K, V>(fields: I, preserve_new_lines: bool) -> Result<Vec<Field>, FormatError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Serialize,
{
    fields
        .into_iter()
        .map(|(name, value)| {
            let name = name.as_ref();
            let text = stringify_value(&value, preserve_new_lines).map_err(|source| {
                FormatError::Serialization {
                    field: Some(name.to_string()),
                    source,
                }
            })?;
            Ok(Field {
                name: name.to_string(),
                text,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::{Error as _, Serializer};
    use serde_json::json;
    use std::collections::BTreeMap;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("circular reference"))
        }
    }

    #[test]
    fn test_primitives() {
        assert_eq!(stringify_value(&json!("info"), true).unwrap(), "\"info\"");
        assert_eq!(stringify_value(&json!(42), true).unwrap(), "42");
        assert_eq!(stringify_value(&json!(1.5), true).unwrap(), "1.5");
        assert_eq!(stringify_value(&json!(true), true).unwrap(), "true");
        assert_eq!(stringify_value(&json!(null), true).unwrap(), "null");
    }

    #[test]
    fn test_absent_value_is_null() {
        let absent: Option<u32> = None;
        assert_eq!(stringify_value(&absent, true).unwrap(), "null");
    }

    #[test]
    fn test_nested_is_compact() {
        let value = json!({"a": [1, 2], "b": {"c": "d"}});
        assert_eq!(
            stringify_value(&value, true).unwrap(),
            r#"{"a":[1,2],"b":{"c":"d"}}"#
        );
    }

    #[test]
    fn test_line_feed_preserved() {
        let text = stringify_value(&json!("one\ntwo"), true).unwrap();
        assert_eq!(text, "\"one\ntwo\"");
    }

    #[test]
    fn test_crlf_preserved() {
        let text = stringify_value(&json!("one\r\ntwo"), true).unwrap();
        assert_eq!(text, "\"one\r\ntwo\"");
    }

    #[test]
    fn test_lone_carriage_return_stays_escaped() {
        let text = stringify_value(&json!("a\rb\r"), true).unwrap();
        assert_eq!(text, r#""a\rb\r""#);
        let text = stringify_value(&json!("a\r\rb\r\n"), true).unwrap();
        assert_eq!(text, "\"a\\r\\rb\r\n\"");
    }

    #[test]
    fn test_line_feed_escaped_when_not_preserved() {
        let text = stringify_value(&json!("one\ntwo"), false).unwrap();
        assert_eq!(text, "\"one\\ntwo\"");
    }

    #[test]
    fn test_other_escapes_untouched() {
        let text = stringify_value(&json!("tab\there \"quoted\""), true).unwrap();
        assert_eq!(text, r#""tab\there \"quoted\"""#);
    }

    #[test]
    fn test_fields_keep_order_and_names() {
        let entry = json!({"level": "info", "code": 7});
        let fields = stringify_fields(entry.as_object().unwrap(), true).unwrap();
        assert_eq!(
            fields,
            vec![
                Field {
                    name: "level".to_string(),
                    text: "\"info\"".to_string()
                },
                Field {
                    name: "code".to_string(),
                    text: "7".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_fields_source_untouched() {
        let entry = json!({"level": "info"});
        let map = entry.as_object().unwrap();
        stringify_fields(map, true).unwrap();
        stringify_fields(map, true).unwrap();
        assert_eq!(map["level"], json!("info"));
    }

    #[test]
    fn test_failing_value_aborts() {
        let mut fields: BTreeMap<&str, Option<Unserializable>> = BTreeMap::new();
        fields.insert("a_ok", None);
        fields.insert("b_bad", Some(Unserializable));

        let err = stringify_fields(&fields, true).unwrap_err();
        assert_eq!(err.field(), Some("b_bad"));
        assert!(err.to_string().contains("circular reference"));
    }
}
