//! logcols - column tables for log objects
//!
//! Renders a log object's fields as a column-aligned text table for
//! console-style log viewers. Values are shown as JSON text, headings are
//! capitalized, and line breaks inside values stay inside their column.
//!
//! ```
//! use logcols::format::{LogObject, ColumnOptions};
//! use serde_json::json;
//!
//! let view = LogObject::new(ColumnOptions::default());
//! let entry = json!({"level": "info", "message": "hello"});
//! let table = view.columns(entry.as_object()).unwrap();
//! assert!(table.starts_with("Level"));
//! ```

pub mod format;
pub mod util;

pub use format::{ColumnOptions, FormatError, LogEntry, LogObject};
