//! JSON Lines → tables
//!
//! Reads one JSON log object per line and writes its column table. Lines that
//! fail to parse or format are reported and skipped; the rest still render.

use anyhow::{Context, Result};
use logcols::format::LogObject;
use serde_json::Value;
use std::io::{BufRead, Write};

/// Outcome of rendering a stream
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    /// Tables written
    pub rendered: usize,
    /// Lines skipped because they could not be parsed or formatted
    pub failed: usize,
}

/// Render every log object in `reader` to `out`, one blank line between tables
pub fn render_json_lines<R, W>(reader: R, view: &LogObject, out: &mut W) -> Result<RenderSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = RenderSummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("Failed to read input line {}", line_no))?;
        if line.trim().is_empty() {
            continue;
        }

        let value: Value = match serde_json::from_str(&line) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(line = line_no, error = %e, "Skipping line that is not valid JSON");
                summary.failed += 1;
                continue;
            }
        };

        let table = match view.columns_of(&value) {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(line = line_no, error = %e, "Skipping line that cannot be formatted");
                summary.failed += 1;
                continue;
            }
        };

        if table.is_empty() {
            tracing::debug!(line = line_no, "Log object has no fields");
            continue;
        }

        if summary.rendered > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", table)?;
        summary.rendered += 1;
    }

    out.flush()?;
    Ok(summary)
}
