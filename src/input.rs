//! Array input parsing
//!
//! Accepts the same loose format as the web form: comma-separated integers.
//! Each entry is trimmed and its leading integer is taken (`"12abc"` → 12,
//! `"3.7"` → 3). Entries without a leading integer are dropped silently.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("enter numbers separated by commas (e.g. 64, 34, 25)")]
    NoNumbers,
}

/// Parse `text` into a non-empty array
pub fn parse_array(text: &str) -> Result<Vec<i64>, InputError> {
    let values: Vec<i64> = text.split(',').filter_map(leading_integer).collect();
    if values.is_empty() {
        Err(InputError::NoNumbers)
    } else {
        Ok(values)
    }
}

/// Render an array the way the input box shows it
pub fn format_array(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn leading_integer(entry: &str) -> Option<i64> {
    let entry = entry.trim();
    let sign_len = usize::from(entry.starts_with(['-', '+']));
    let digits = entry[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    entry[..sign_len + digits].parse().ok()
}
