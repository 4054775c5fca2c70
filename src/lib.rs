//! Tetris Stack (workspace facade crate).
//!
//! Re-exports the workspace crates as `tetris_stack::{core, input, term, types}`
//! and hosts the pieces that tie them together: configuration, the
//! interaction loop and JSON observations.

pub mod config;
pub mod observe;
pub mod session;

pub use tetris_stack_core as core;
pub use tetris_stack_input as input;
pub use tetris_stack_term as term;
pub use tetris_stack_types as types;
