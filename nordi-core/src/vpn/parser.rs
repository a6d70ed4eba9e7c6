//! Line-oriented parsing helpers for nordvpn output
//!
//! The binary prints informal `Label: value` text, padded with
//! carriage returns by its progress spinner. These helpers are pure
//! and borrow from the captured buffer; splitting on the first
//! delimiter occurrence per line is the whole contract.

/// Key/value delimiter used across all nordvpn output
pub const DELIM: &str = ": ";

/// Strip the carriage-return padding the binary's spinner leaves behind
///
/// Removes the trailing `\r` run; if the remainder still starts with
/// `\r`, only the text after the last `\r` is the real output.
pub fn trim_carriage_returns(text: &str) -> &str {
    let text = text.trim_end_matches('\r');
    if text.starts_with('\r') {
        match text.rfind('\r') {
            Some(last) => &text[last + 1..],
            None => text,
        }
    } else {
        text
    }
}

/// Split captured output into at most `max_lines` newline-terminated lines
///
/// Only segments ending in `\n` count as lines. Output with no newline
/// at all (e.g. a bare version string) is returned whole as a single
/// line.
pub fn split_lines(text: &str, max_lines: usize) -> Vec<&str> {
    let text = trim_carriage_returns(text);
    let mut lines = Vec::new();
    let mut rest = text;
    while lines.len() < max_lines {
        match rest.find('\n') {
            Some(end) => {
                lines.push(&rest[..end]);
                rest = &rest[end + 1..];
            }
            None => break,
        }
    }
    if lines.is_empty() && max_lines > 0 {
        lines.push(text);
    }
    lines
}

/// The text after the first occurrence of `delim`, empty when absent
pub fn split_value<'a>(line: &'a str, delim: &str) -> &'a str {
    line.find(delim)
        .map(|at| &line[at + delim.len()..])
        .unwrap_or("")
}

/// The text before the first occurrence of `delim`, whole line when absent
pub fn split_key<'a>(line: &'a str, delim: &str) -> &'a str {
    line.find(delim).map(|at| &line[..at]).unwrap_or(line)
}
