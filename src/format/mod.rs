//! Log object formatter
//!
//! Turns a log object (a JSON object of field name → value) into a
//! column-aligned text table for console display:
//!
//! 1. every value is rendered as JSON text ([`stringify_fields`])
//! 2. headings are capitalized ([`capitalize`])
//! 3. the fields are laid out as columns ([`columnify`])
//!
//! The caller's object is only borrowed; each call builds fresh output, so the
//! same input always renders the same table. Callers re-run the formatter when
//! their content changes.

mod columns;
mod error;
mod heading;
mod locate;
mod stringify;

pub use columns::{columnify, Align, ColumnOptions, Layout};
pub use error::FormatError;
pub use heading::capitalize;
pub use stringify::{stringify_fields, stringify_value, Field};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

/// A log object: field name → value, in insertion order
pub type LogEntry = serde_json::Map<String, Value>;

/// Format a log object as a column table.
///
/// Absent content renders as an empty string.
///
/// ```
/// use logcols::format::{format_columns, ColumnOptions};
/// use serde_json::json;
///
/// let entry = json!({"level": "info", "message": "hello"});
/// let table = format_columns(entry.as_object(), &ColumnOptions::default()).unwrap();
/// assert_eq!(table, "Level  Message\n\"info\" \"hello\"");
/// ```
pub fn format_columns(content: Option<&LogEntry>, options: &ColumnOptions) -> Result<String, FormatError> {
    let Some(entry) = content else {
        debug!("No log content to format, rendering empty table");
        return Ok(String::new());
    };
    format_fields(entry, options)
}

/// Format any mapping whose values implement `Serialize`.
///
/// Fails without output if any value cannot be serialized.
pub fn format_fields<I, K, V>(fields: I, options: &ColumnOptions) -> Result<String, FormatError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Serialize,
{
    let fields = stringify_fields(fields, options.preserve_new_lines)?;
    trace!(fields = fields.len(), layout = options.layout.as_str(), "Formatting log object");
    Ok(layout_fields(&fields, options))
}

/// Format a value that serializes to a JSON object.
///
/// `null` (including `None`) is treated as absent content. When a field of
/// the object fails to serialize, the error names that field.
pub fn format_serializable<T>(value: &T, options: &ColumnOptions) -> Result<String, FormatError>
where
    T: Serialize + ?Sized,
{
    let converted = serde_json::to_value(value).map_err(|source| FormatError::Serialization {
        field: locate::failing_field(value),
        source,
    })?;

    match converted {
        Value::Object(entry) => format_fields(&entry, options),
        Value::Null => format_columns(None, options),
        other => Err(FormatError::NotAnObject {
            kind: value_kind(&other),
        }),
    }
}

/// Arrange already-stringified fields according to the layout
pub fn layout_fields(fields: &[Field], options: &ColumnOptions) -> String {
    match options.layout {
        Layout::Columns => {
            let headings: Vec<String> = fields.iter().map(|f| capitalize(&f.name)).collect();
            let row: Vec<String> = fields.iter().map(|f| f.text.clone()).collect();
            columnify(&headings, &[row], options)
        }
        Layout::KeyValue => {
            if fields.is_empty() {
                return String::new();
            }
            let headings = vec![capitalize("key"), capitalize("value")];
            let rows: Vec<Vec<String>> = fields
                .iter()
                .map(|f| vec![f.name.clone(), f.text.clone()])
                .collect();
            columnify(&headings, &rows, options)
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Log object view
///
/// Holds the layout options and renders the `columns` text for whatever
/// content it is handed. Stateless between calls.
#[derive(Debug, Clone, Default)]
pub struct LogObject {
    options: ColumnOptions,
}

impl LogObject {
    pub fn new(options: ColumnOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ColumnOptions {
        &self.options
    }

    /// Render the column table for `content`
    pub fn columns(&self, content: Option<&LogEntry>) -> Result<String, FormatError> {
        format_columns(content, &self.options)
    }

    /// Render the column table for any value that serializes to an object
    pub fn columns_of<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, FormatError> {
        format_serializable(value, &self.options)
    }
}
