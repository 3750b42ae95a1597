//! Custom Tera filter for title casing.

use std::collections::HashMap;

use tera::{Result, Value};

/// Tera filter wrapping [`to_title_case`].
///
/// Rejects non-string values; extra filter arguments are ignored.
pub fn title_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("title_case filter expects a string"))?;
    Ok(Value::String(to_title_case(s)))
}

/// Title-case a string: split on whitespace runs, uppercase the first
/// character of each token, lowercase the rest, rejoin with single spaces.
///
/// Whitespace-only input collapses to the empty string. Non-whitespace
/// separators (hyphens, apostrophes) are not word boundaries, so
/// `"hello-world"` becomes `"Hello-world"`.
pub fn to_title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
