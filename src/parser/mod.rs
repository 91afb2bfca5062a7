//! Argument parsing module
//!
//! Small string grammars shared by batch and interactive mode:
//! command lines, `min..max` ranges, strings and integers.

use crate::error::{Result, WriterError};
use crate::models::Range;

/// Default token limit when splitting an interactive line
pub const DEFAULT_LIMIT: usize = 2;

/// Separator between the two bounds of a range
const RANGE_SEPARATOR: &str = "..";

/// Split a line into at most `limit` whitespace-delimited tokens.
///
/// The line is trimmed first. The last token keeps its internal whitespace,
/// so with a limit of 2 the result is the command token and the unsplit
/// remainder. A limit of 0 splits on every whitespace run. An empty line
/// yields no tokens.
pub fn split_command(line: &str, limit: usize) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut rest = line.trim();

    while !rest.is_empty() {
        if limit != 0 && tokens.len() + 1 == limit {
            tokens.push(rest);
            break;
        }

        match rest.find(char::is_whitespace) {
            Some(end) => {
                tokens.push(&rest[..end]);
                rest = rest[end..].trim_start();
            }
            None => {
                tokens.push(rest);
                break;
            }
        }
    }

    tokens
}

/// Parse a range in the form `min..max`.
///
/// Bounds are returned in the order given, even when the first is larger.
pub fn parse_range(text: &str) -> Result<Range> {
    let parts: Vec<&str> = text.split(RANGE_SEPARATOR).collect();

    if parts.len() != 2 {
        return Err(WriterError::Format(format!(
            "Invalid range '{}': expected <number>..<number>",
            text
        )));
    }

    let min = parse_float(parts[0], text)?;
    let max = parse_float(parts[1], text)?;

    Ok(Range::new(min, max))
}

fn parse_float(part: &str, range_text: &str) -> Result<f64> {
    let value: f64 = part.trim().parse().map_err(|_| {
        WriterError::Format(format!(
            "Invalid number '{}' in range '{}'",
            part.trim(),
            range_text
        ))
    })?;

    // Rust accepts "inf" and "NaN", neither of which is a usable bound
    if !value.is_finite() {
        return Err(WriterError::Format(format!(
            "Invalid number '{}' in range '{}'",
            part.trim(),
            range_text
        )));
    }

    Ok(value)
}

/// Coerce an argument to a string, failing only when it is absent
pub fn parse_string(value: Option<&str>, field: &str) -> Result<String> {
    value
        .map(str::to_string)
        .ok_or_else(|| WriterError::MissingArgument(field.to_string()))
}

/// Parse a base-10 integer argument
pub fn parse_integer(value: Option<&str>, field: &str) -> Result<i64> {
    let text = value.ok_or_else(|| WriterError::MissingArgument(field.to_string()))?;

    text.trim()
        .parse()
        .map_err(|_| WriterError::Format(format!("Invalid integer '{}' for {}", text, field)))
}
