//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (core logic, terminal rendering, JSON observations).
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming pieces held by the circular queue |
//! | `RESERVE_CAPACITY` | 3 | Pieces held by the reserve stack |
//! | `TRIPLE_SWAP_WIDTH` | 3 | Slots exchanged by the triple swap |
//!
//! # Commands
//!
//! Menu codes map onto [`Command`]:
//!
//! | Code | Command |
//! |------|---------|
//! | 1 | Play the front of the queue |
//! | 2 | Reserve the front of the queue |
//! | 3 | Use the top reserved piece |
//! | 4 | Swap queue front with reserve top |
//! | 5 | Swap the first three of each |
//! | 0 | Exit |
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{Command, Piece, PieceKind, QUEUE_CAPACITY, RESERVE_CAPACITY};
//!
//! let piece = Piece::new(PieceKind::T, 3);
//! assert_eq!(piece.to_string(), "T3");
//!
//! assert_eq!(Command::from_code(2), Some(Command::Reserve));
//! assert_eq!(Command::from_str("swap3"), Some(Command::SwapTriple));
//! assert_eq!(Command::from_code(9), None);
//!
//! assert_eq!(QUEUE_CAPACITY, 5);
//! assert_eq!(RESERVE_CAPACITY, 3);
//! ```

use std::fmt;

/// Number of upcoming pieces kept in the circular queue.
pub const QUEUE_CAPACITY: usize = 5;

/// Number of pieces the reserve stack can hold.
pub const RESERVE_CAPACITY: usize = 3;

/// Number of queue/reserve slot pairs exchanged by [`Command::SwapTriple`].
pub const TRIPLE_SWAP_WIDTH: usize = 3;

/// Size of the piece alphabet.
pub const PIECE_KIND_COUNT: usize = 7;

/// The seven piece kinds
///
/// Ordered as the generator's alphabet: `I O T L S Z J`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    S,
    Z,
    J,
}

impl PieceKind {
    /// Every kind, in alphabet order.
    pub const ALL: [PieceKind; PIECE_KIND_COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
    ];

    /// Uppercase display letter.
    pub fn symbol(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
        }
    }
}

/// A generated piece.
///
/// Pieces are immutable once created; `id` is assigned by the generator and
/// never reused within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u64,
}

impl Piece {
    pub const fn new(kind: PieceKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.symbol(), self.id)
    }
}

/// Player commands accepted by the dispatcher
///
/// Each command maps to a numeric menu code (see the module docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Stop the interaction loop
    Exit,
    /// Consume the front of the queue
    Play,
    /// Move the front of the queue onto the reserve
    Reserve,
    /// Consume the top of the reserve
    UseReserved,
    /// Exchange queue front and reserve top
    SwapFront,
    /// Exchange the first three queue slots with the top three reserve slots
    SwapTriple,
}

impl Command {
    /// Menu order: actions first, exit last.
    pub const MENU: [Command; 6] = [
        Command::Play,
        Command::Reserve,
        Command::UseReserved,
        Command::SwapFront,
        Command::SwapTriple,
        Command::Exit,
    ];

    /// Map a numeric menu code to a command.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::Command;
    ///
    /// assert_eq!(Command::from_code(0), Some(Command::Exit));
    /// assert_eq!(Command::from_code(4), Some(Command::SwapFront));
    /// assert_eq!(Command::from_code(-1), None);
    /// ```
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Command::Exit),
            1 => Some(Command::Play),
            2 => Some(Command::Reserve),
            3 => Some(Command::UseReserved),
            4 => Some(Command::SwapFront),
            5 => Some(Command::SwapTriple),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Command::Exit => 0,
            Command::Play => 1,
            Command::Reserve => 2,
            Command::UseReserved => 3,
            Command::SwapFront => 4,
            Command::SwapTriple => 5,
        }
    }

    /// Parse command from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::Command;
    ///
    /// assert_eq!(Command::from_str("Play"), Some(Command::Play));
    /// assert_eq!(Command::from_str("quit"), Some(Command::Exit));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "exit" | "quit" => Some(Command::Exit),
            "play" => Some(Command::Play),
            "reserve" => Some(Command::Reserve),
            "use" | "usereserved" => Some(Command::UseReserved),
            "swap" | "swapfront" => Some(Command::SwapFront),
            "swap3" | "swaptriple" => Some(Command::SwapTriple),
            _ => None,
        }
    }

    /// Convert to camelCase string for observations
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Exit => "exit",
            Command::Play => "play",
            Command::Reserve => "reserve",
            Command::UseReserved => "useReserved",
            Command::SwapFront => "swapFront",
            Command::SwapTriple => "swapTriple",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Command::Exit => "Quit",
            Command::Play => "Play the piece at the front of the queue",
            Command::Reserve => "Send the front piece to the reserve",
            Command::UseReserved => "Use the top reserved piece",
            Command::SwapFront => "Swap queue front with reserve top",
            Command::SwapTriple => "Swap the first 3 of the queue with the 3 reserved",
        }
    }
}

/// Why an action could not be applied.
///
/// Rejections are expected, recoverable conditions: the state is left
/// untouched and the caller reports the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Rejection {
    #[error("the upcoming queue is empty")]
    QueueEmpty,
    #[error("the reserve is full")]
    ReserveFull,
    #[error("the reserve is empty")]
    ReserveEmpty,
    #[error("both the queue and the reserve need a piece to swap")]
    SwapNeedsBoth,
    #[error("the queue and the reserve both need 3 pieces for a triple swap")]
    TripleSwapNeedsThree,
}

/// Result of dispatching one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Played(Piece),
    Reserved(Piece),
    Used(Piece),
    Swapped,
    SwappedTriple,
    Exit,
    /// Code that does not name a command.
    InvalidCommand(i64),
    Rejected {
        command: Command,
        reason: Rejection,
    },
}

impl Outcome {
    pub fn is_exit(&self) -> bool {
        matches!(self, Outcome::Exit)
    }

    /// The piece that left the game or moved to the reserve, if any.
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Outcome::Played(p) | Outcome::Reserved(p) | Outcome::Used(p) => Some(*p),
            _ => None,
        }
    }

    /// Short camelCase tag for observations.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Played(_) => "played",
            Outcome::Reserved(_) => "reserved",
            Outcome::Used(_) => "used",
            Outcome::Swapped => "swapped",
            Outcome::SwappedTriple => "swappedTriple",
            Outcome::Exit => "exit",
            Outcome::InvalidCommand(_) => "invalidCommand",
            Outcome::Rejected { .. } => "rejected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacities_match_menu_program() {
        assert_eq!(QUEUE_CAPACITY, 5);
        assert_eq!(RESERVE_CAPACITY, 3);
        assert_eq!(TRIPLE_SWAP_WIDTH, 3);
        assert!(TRIPLE_SWAP_WIDTH <= RESERVE_CAPACITY);
        assert!(TRIPLE_SWAP_WIDTH <= QUEUE_CAPACITY);
    }

    #[test]
    fn command_codes_round_trip() {
        for cmd in Command::MENU {
            assert_eq!(Command::from_code(cmd.code()), Some(cmd));
        }
        assert_eq!(Command::from_code(6), None);
        assert_eq!(Command::from_code(i64::MIN), None);
    }

    #[test]
    fn piece_kind_alphabet_order() {
        let letters: String = PieceKind::ALL.iter().map(|k| k.symbol()).collect();
        assert_eq!(letters, "IOTLSZJ");
    }

    #[test]
    fn outcome_piece_accessor() {
        let p = Piece::new(PieceKind::Z, 12);
        assert_eq!(Outcome::Played(p).piece(), Some(p));
        assert_eq!(Outcome::Swapped.piece(), None);
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(Rejection::ReserveFull.to_string(), "the reserve is full");
        assert_eq!(
            Rejection::SwapNeedsBoth.to_string(),
            "both the queue and the reserve need a piece to swap"
        );
    }
}
