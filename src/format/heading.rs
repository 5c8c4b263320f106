//! Heading transform

/// Upper-case the first character of a heading, leaving the rest as-is.
///
/// ```
/// use logcols::format::capitalize;
///
/// assert_eq!(capitalize("message"), "Message");
/// assert_eq!(capitalize("requestId"), "RequestId");
/// ```
pub fn capitalize(heading: &str) -> String {
    let mut chars = heading.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
