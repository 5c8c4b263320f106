//! Display-width helpers shared by the column layout
//!
//! Everything here measures text in terminal columns (via `unicode-width`),
//! not bytes or chars, so CJK and emoji cells line up.

use crate::format::Align;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Number of terminal columns `s` occupies.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Cut `s` down to at most `width` columns, ending with `marker` when cut.
///
/// Truncation always lands on a UTF-8 character boundary. If the marker alone
/// is wider than `width`, the result is just the marker.
///
/// # Examples
///
/// ```
/// use logcols::util::truncate_to_width;
///
/// assert_eq!(truncate_to_width("hello world", 6, "…"), "hello…");
/// assert_eq!(truncate_to_width("short", 10, "…"), "short");
/// ```
pub fn truncate_to_width(s: &str, width: usize, marker: &str) -> String {
    if s.width() <= width {
        return s.to_string();
    }

    // Leave room for the marker
    let target_width = width.saturating_sub(marker.width());

    let mut current_width = 0;
    let mut truncate_at = 0;
    for (i, c) in s.char_indices() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        current_width += char_width;
        truncate_at = i + c.len_utf8();
    }

    let mut out = String::with_capacity(truncate_at + marker.len());
    out.push_str(&s[..truncate_at]);
    out.push_str(marker);
    out
}

/// Pad `s` with `fill` up to `width` columns. Text already at or past `width`
/// is returned unchanged.
pub fn pad_to_width(s: &str, width: usize, align: Align, fill: char) -> String {
    let gap = width.saturating_sub(s.width());
    if gap == 0 {
        return s.to_string();
    }

    let (left, right) = match align {
        Align::Left => (0, gap),
        Align::Right => (gap, 0),
        Align::Center => (gap / 2, gap - gap / 2),
    };

    let mut out = String::with_capacity(s.len() + gap * fill.len_utf8());
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(s);
    out.extend(std::iter::repeat(fill).take(right));
    out
}

/// Word-wrap a single line to `width` columns.
///
/// Words are split on spaces. A word wider than `width` is broken mid-word.
/// A `width` of zero disables wrapping. Always returns at least one line.
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.width() <= width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split(' ') {
        let word_width = word.width();

        if word_width > width {
            // Hard-break: flush what we have, then fill lines char by char
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            for c in word.chars() {
                let char_width = c.width().unwrap_or(0);
                if current_width + char_width > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += char_width;
            }
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            current_width = word_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}
