//! Column layout engine
//!
//! Takes headings plus rows of cell text and lays them out as fixed-width
//! columns. Cells may span several physical lines; every line of a cell stays
//! in its own column and shorter cells are padded with blank lines.

use crate::util::{display_width, pad_to_width, truncate_to_width, wrap_to_width};

/// Horizontal alignment of cell text within its column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

impl Align {
    /// Parse alignment from config, falling back to `Left`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "right" => Self::Right,
            "center" | "centre" => Self::Center,
            _ => Self::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Right => "right",
            Align::Center => "center",
        }
    }
}

/// How a log object's fields map onto columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// One column per field, headed by the capitalized field name
    #[default]
    Columns,
    /// Two columns headed `Key` and `Value`, one row per field
    KeyValue,
}

impl Layout {
    /// Parse layout from config, falling back to `Columns`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "key-value" | "keyvalue" | "kv" => Self::KeyValue,
            _ => Self::Columns,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Columns => "columns",
            Layout::KeyValue => "key-value",
        }
    }
}

/// Options controlling the column layout
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnOptions {
    /// Field-to-column mapping
    pub layout: Layout,

    /// Placed between adjacent columns
    pub splitter: String,

    /// Fill character used to pad cells to column width
    pub padding: char,

    /// Render the heading row
    pub show_headers: bool,

    /// Minimum column width in terminal columns
    pub min_width: usize,

    /// Maximum column width; `None` means unbounded
    pub max_width: Option<usize>,

    /// Cut over-wide lines instead of wrapping them
    pub truncate: bool,

    /// Appended to truncated lines
    pub truncate_marker: String,

    /// Alignment applied to every column
    pub align: Align,

    /// Keep line breaks inside values as real breaks in the cell
    pub preserve_new_lines: bool,
}

impl Default for ColumnOptions {
    fn default() -> Self {
        Self {
            layout: Layout::Columns,
            splitter: " ".to_string(),
            padding: ' ',
            show_headers: true,
            min_width: 0,
            max_width: None,
            truncate: false,
            truncate_marker: "…".to_string(),
            align: Align::Left,
            preserve_new_lines: true,
        }
    }
}

/// Lay out `headings` and `rows` as aligned columns.
///
/// The number of columns is `headings.len()`; missing cells render empty and
/// extra cells are ignored. Each output line ends with its last non-empty
/// cell: fill is never appended after it, so cell text is kept exactly. Column
/// width is clamped to `[min_width, max_width]`, with `max_width` winning when
/// the two conflict. No headings means no columns, so the result is empty.
pub fn columnify(headings: &[String], rows: &[Vec<String>], options: &ColumnOptions) -> String {
    let column_count = headings.len();
    if column_count == 0 {
        return String::new();
    }

    let heading_cells: Vec<Vec<String>> = headings.iter().map(|h| fit_cell(h, options)).collect();
    let body: Vec<Vec<Vec<String>>> = rows
        .iter()
        .map(|row| {
            (0..column_count)
                .map(|i| fit_cell(row.get(i).map(String::as_str).unwrap_or(""), options))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..column_count)
        .map(|i| {
            let mut width = options.min_width;
            if options.show_headers {
                width = width.max(widest_line(&heading_cells[i]));
            }
            for row in &body {
                width = width.max(widest_line(&row[i]));
            }
            match max_width(options) {
                Some(max) => width.min(max),
                None => width,
            }
        })
        .collect();

    let mut lines = Vec::new();
    if options.show_headers {
        render_row(&heading_cells, &widths, options, &mut lines);
    }
    for row in &body {
        render_row(row, &widths, options, &mut lines);
    }

    lines.join("\n")
}

/// Split a cell into physical lines and fit each to the max width
fn fit_cell(text: &str, options: &ColumnOptions) -> Vec<String> {
    let flattened;
    let text = if options.preserve_new_lines {
        text
    } else {
        flattened = text.replace("\r\n", " ").replace('\n', " ");
        flattened.as_str()
    };

    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .flat_map(|line| match max_width(options) {
            Some(max) if display_width(line) > max => {
                if options.truncate {
                    vec![truncate_to_width(line, max, &options.truncate_marker)]
                } else {
                    wrap_to_width(line, max)
                }
            }
            _ => vec![line.to_string()],
        })
        .collect()
}

/// Effective max width; zero means unbounded
fn max_width(options: &ColumnOptions) -> Option<usize> {
    options.max_width.filter(|&w| w > 0)
}

fn widest_line(cell: &[String]) -> usize {
    cell.iter().map(|line| display_width(line)).max().unwrap_or(0)
}

fn render_row(cells: &[Vec<String>], widths: &[usize], options: &ColumnOptions, out: &mut Vec<String>) {
    let height = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);

    for line_idx in 0..height {
        let lines: Vec<&str> = cells
            .iter()
            .map(|cell| cell.get(line_idx).map(String::as_str).unwrap_or(""))
            .collect();

        // Columns after the last non-empty cell are left off entirely
        let Some(last) = lines.iter().rposition(|line| !line.is_empty()) else {
            out.push(String::new());
            continue;
        };

        let parts: Vec<String> = lines[..=last]
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (line, &width))| {
                if i == last {
                    pad_leading(line, width, options.align, options.padding)
                } else {
                    pad_to_width(line, width, options.align, options.padding)
                }
            })
            .collect();

        out.push(parts.join(options.splitter.as_str()));
    }
}

/// Pad only the fill that goes before the text; the line ends with the cell itself
fn pad_leading(line: &str, width: usize, align: Align, fill: char) -> String {
    let gap = width.saturating_sub(display_width(line));
    let leading = match align {
        Align::Left => 0,
        Align::Right => gap,
        Align::Center => gap / 2,
    };
    pad_to_width(line, display_width(line) + leading, Align::Right, fill)
}
