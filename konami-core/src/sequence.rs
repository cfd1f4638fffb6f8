//! Key sequence definitions and parsing

use crate::error::{Error, Result};
use crate::types::KeyCode;

/// Up, Up, Down, Down, Left, Right, Left, Right, B, A
pub const KONAMI_CODE: [KeyCode; 10] = [
    KeyCode::ArrowUp,
    KeyCode::ArrowUp,
    KeyCode::ArrowDown,
    KeyCode::ArrowDown,
    KeyCode::ArrowLeft,
    KeyCode::ArrowRight,
    KeyCode::ArrowLeft,
    KeyCode::ArrowRight,
    KeyCode::KeyB,
    KeyCode::KeyA,
];

/// Parse a sequence string like "up up down down" or "ArrowUp, KeyB + KeyA"
///
/// # Examples
/// ```
/// use konami_core::{parse_sequence, KeyCode};
///
/// let keys = parse_sequence("up up b a").unwrap();
/// assert_eq!(keys, vec![KeyCode::ArrowUp, KeyCode::ArrowUp, KeyCode::KeyB, KeyCode::KeyA]);
/// ```
pub fn parse_sequence(text: &str) -> Result<Vec<KeyCode>> {
    let keys = text
        .split(|c: char| c == ',' || c == '+' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(KeyCode::parse)
        .collect::<Result<Vec<_>>>()?;

    if keys.is_empty() {
        return Err(Error::EmptySequence);
    }
    Ok(keys)
}

/// Parse a list of key names, e.g. from a config file
pub fn parse_key_names<S: AsRef<str>>(names: &[S]) -> Result<Vec<KeyCode>> {
    if names.is_empty() {
        return Err(Error::EmptySequence);
    }
    names.iter().map(|name| KeyCode::parse(name.as_ref())).collect()
}

/// Render keys as space-separated canonical names
pub fn format_sequence(keys: &[KeyCode]) -> String {
    keys.iter().map(KeyCode::code).collect::<Vec<_>>().join(" ")
}
