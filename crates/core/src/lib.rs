//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the piece containers, the piece generator and the
//! action dispatcher. It has **no dependencies** on terminal I/O or input
//! parsing, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Unit tests for every container primitive and action
//! - **Allocation-free**: Queue, reserve and snapshots live on the stack
//!
//! # Module Structure
//!
//! - [`queue`]: circular FIFO of upcoming pieces (capacity 5)
//! - [`stack`]: bounded LIFO of reserved pieces (capacity 3)
//! - [`generator`]: piece generator with a per-instance id counter
//! - [`rng`]: LCG plus uniform and 7-bag kind randomizers
//! - [`game_state`]: the five player actions over queue and reserve
//! - [`snapshot`]: owned copies of the state for renderers
//!
//! # Actions
//!
//! - **Play**: consume the queue front, then refill one piece
//! - **Reserve**: move the queue front onto the reserve, then refill one piece
//! - **Use**: consume the reserve top
//! - **Swap**: exchange queue front and reserve top
//! - **Swap 3**: exchange queue positions 0..3 with reserve depths 0..3
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::GameState;
//! use tetris_stack_types::{Command, Outcome, QUEUE_CAPACITY};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! let out = game.apply(Command::Reserve);
//! assert!(matches!(out, Outcome::Reserved(_)));
//! assert_eq!(game.queue().len(), QUEUE_CAPACITY);
//! assert_eq!(game.reserve().len(), 1);
//!
//! assert_eq!(game.dispatch(0), Outcome::Exit);
//! ```

pub mod game_state;
pub mod generator;
pub mod queue;
pub mod rng;
pub mod snapshot;
pub mod stack;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameConfig, GameState, Stats};
pub use generator::PieceGenerator;
pub use queue::{CircularQueue, UpcomingQueue};
pub use rng::{BagRandomizer, RandomizerKind, SimpleRng};
pub use snapshot::GameSnapshot;
pub use stack::{BoundedStack, ReserveStack};
