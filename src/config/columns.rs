//! Column layout configuration
//!
//! Maps the `[columns]` section onto the formatter's `ColumnOptions`.

use logcols::format::{Align, ColumnOptions, Layout};
use serde::Deserialize;

/// Column settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileColumns {
    pub layout: Option<String>,
    pub splitter: Option<String>,
    pub padding: Option<String>,
    pub show_headers: Option<bool>,
    pub min_width: Option<usize>,
    pub max_width: Option<usize>,
    pub truncate: Option<bool>,
    pub truncate_marker: Option<String>,
    pub align: Option<String>,
    pub preserve_new_lines: Option<bool>,
}

impl FileColumns {
    /// Create layout options from file config with defaults
    pub fn into_options(file: Option<FileColumns>) -> ColumnOptions {
        let file = file.unwrap_or_default();
        let defaults = ColumnOptions::default();

        ColumnOptions {
            layout: file
                .layout
                .as_deref()
                .map(Layout::parse)
                .unwrap_or(defaults.layout),
            splitter: file.splitter.unwrap_or(defaults.splitter),
            // Only the first character of the padding string is used
            padding: file
                .padding
                .and_then(|p| p.chars().next())
                .unwrap_or(defaults.padding),
            show_headers: file.show_headers.unwrap_or(defaults.show_headers),
            min_width: file.min_width.unwrap_or(defaults.min_width),
            max_width: file.max_width.filter(|&w| w > 0).or(defaults.max_width),
            truncate: file.truncate.unwrap_or(defaults.truncate),
            truncate_marker: file.truncate_marker.unwrap_or(defaults.truncate_marker),
            align: file
                .align
                .as_deref()
                .map(Align::parse)
                .unwrap_or(defaults.align),
            preserve_new_lines: file
                .preserve_new_lines
                .unwrap_or(defaults.preserve_new_lines),
        }
    }
}
