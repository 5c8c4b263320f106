//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// Quote a string as a TOML basic string
fn toml_string(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

impl Config {
    /// Serialize the effective configuration as a commented TOML document
    pub fn to_toml(&self) -> String {
        let columns = &self.columns;

        format!(
            r#"# logcols configuration
# Environment variables LOGCOLS_LAYOUT, LOGCOLS_MAX_WIDTH and LOGCOLS_LOG_LEVEL
# override the values below; command-line flags override both.

[columns]
# "columns": one column per field, headed by the capitalized field name
# "key-value": two columns (Key, Value), one row per field
layout = {layout}
splitter = {splitter}
padding = {padding}
show_headers = {show_headers}
min_width = {min_width}
# 0 = unbounded
max_width = {max_width}
# Cut over-wide lines instead of wrapping them
truncate = {truncate}
truncate_marker = {truncate_marker}
# left | right | center
align = {align}
# Keep line breaks inside values as real breaks within the column
preserve_new_lines = {preserve_new_lines}

[logging]
# trace | debug | info | warn | error (RUST_LOG takes precedence)
level = {level}
"#,
            layout = toml_string(columns.layout.as_str()),
            splitter = toml_string(&columns.splitter),
            padding = toml_string(&columns.padding.to_string()),
            show_headers = columns.show_headers,
            min_width = columns.min_width,
            max_width = columns.max_width.unwrap_or(0),
            truncate = columns.truncate,
            truncate_marker = toml_string(&columns.truncate_marker),
            align = toml_string(columns.align.as_str()),
            preserve_new_lines = columns.preserve_new_lines,
            level = toml_string(self.logging.level.as_str()),
        )
    }
}
