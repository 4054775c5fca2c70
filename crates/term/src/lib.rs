//! Terminal output module.
//!
//! A small rendering layer for the menu-driven game. The view maps core
//! snapshots and outcomes into styled lines without doing any I/O; the
//! renderer encodes those lines with crossterm and flushes them to a writer.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep layout testable as plain text
//! - Allow colour to be switched off for pipes and logs

pub mod renderer;
pub mod style;
pub mod view;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use renderer::{encode_lines_into, TerminalRenderer};
pub use style::{Line, Rgb, Span, Style};
pub use view::{piece_color, StateView};
