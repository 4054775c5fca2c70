//! Line-oriented input module.
//!
//! This module is intentionally independent of any terminal framework. It
//! maps typed lines (menu numbers or command names) to numeric menu codes and
//! provides a blocking reader that skips blank lines.

pub mod map;
pub mod reader;

pub use tetris_stack_types as types;

pub use map::{parse_line, LineInput, ParseError};
pub use reader::{Input, LineReader};
