//! Mapping from typed lines to menu codes.

use crate::types::Command;

/// A successfully parsed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineInput {
    /// Numeric menu code; not necessarily a known command.
    Code(i64),
    /// Whitespace only.
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("not a menu option: {0:?}")]
    Unrecognized(String),
}

/// Map one line of user input to a menu code.
///
/// Accepts integers (`"2"`, `" -1 "`) and command names (`"reserve"`,
/// `"QUIT"`). Integers are passed through unchecked so the dispatcher can
/// report unknown codes itself.
pub fn parse_line(line: &str) -> Result<LineInput, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(LineInput::Blank);
    }
    if let Ok(code) = trimmed.parse::<i64>() {
        return Ok(LineInput::Code(code));
    }
    match Command::from_str(trimmed) {
        Some(command) => Ok(LineInput::Code(command.code())),
        None => Err(ParseError::Unrecognized(trimmed.to_string())),
    }
}
