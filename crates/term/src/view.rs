//! StateView: maps a `GameSnapshot` and outcomes into styled lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::style::{Line, Rgb, Span, Style};
use crate::types::{Command, Outcome, Piece, PieceKind};

const RULE: &str = "-----------------------------";

/// Text layout for the menu-driven game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateView {
    show_stats: bool,
}

impl StateView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stats(mut self, show_stats: bool) -> Self {
        self.show_stats = show_stats;
        self
    }

    /// Queue front-to-back and reserve top-to-bottom.
    pub fn render_state(&self, snap: &GameSnapshot) -> Vec<Line> {
        let heading = Style {
            bold: true,
            ..Style::PLAIN
        };

        let mut lines = Vec::with_capacity(6);
        lines.push(Line::new());
        let mut title = Line::new();
        title.push(Span::styled("--- CURRENT STATE ---", heading));
        lines.push(title);

        let mut queue = Line::plain("Piece queue: ");
        push_pieces(&mut queue, snap.queue.iter());
        lines.push(queue);

        let mut reserve = Line::plain("Reserve (top -> bottom): ");
        push_pieces(&mut reserve, snap.reserve.iter());
        lines.push(reserve);

        if self.show_stats {
            let s = snap.stats;
            lines.push(Line::plain(format!(
                "Played {} | Reserved {} | Used {} | Swaps {} | Next id {}",
                s.played,
                s.reserved,
                s.used,
                s.swaps + s.triple_swaps,
                snap.next_id
            )));
        }

        lines.push(Line::plain(RULE));
        lines
    }

    pub fn render_menu(&self) -> Vec<Line> {
        let mut lines = Vec::with_capacity(Command::MENU.len() + 2);
        lines.push(Line::new());
        lines.push(Line::plain("Options:"));
        for command in Command::MENU {
            lines.push(Line::plain(format!("{} - {}", command.code(), command.label())));
        }
        lines
    }

    /// Prompt printed without a trailing newline.
    pub fn render_prompt(&self) -> Line {
        Line::plain("Choice: ")
    }

    pub fn render_outcome(&self, outcome: &Outcome) -> Vec<Line> {
        let mut line = Line::new();
        match outcome {
            Outcome::Played(p) => {
                line.push(Span::plain("Action: piece "));
                line.push(piece_span(*p));
                line.push(Span::plain(" played."));
            }
            Outcome::Reserved(p) => {
                line.push(Span::plain("Action: piece "));
                line.push(piece_span(*p));
                line.push(Span::plain(" moved to the reserve."));
            }
            Outcome::Used(p) => {
                line.push(Span::plain("Action: reserved piece "));
                line.push(piece_span(*p));
                line.push(Span::plain(" used."));
            }
            Outcome::Swapped => {
                line.push(Span::plain(
                    "Action: swapped the queue front with the reserve top.",
                ));
            }
            Outcome::SwappedTriple => {
                line.push(Span::plain(
                    "Action: swapped the first 3 of the queue with the 3 reserved.",
                ));
            }
            Outcome::Exit => {
                line.push(Span::plain("Leaving Tetris Stack. See you next time!"));
            }
            Outcome::InvalidCommand(code) => {
                line.push(Span::styled(
                    format!("Invalid option ({code}). Try again."),
                    warning_style(),
                ));
            }
            Outcome::Rejected { command, reason } => {
                line.push(Span::styled(
                    format!("Action: cannot {}: {}.", verb(*command), reason),
                    warning_style(),
                ));
            }
        }
        vec![Line::new(), line]
    }

    /// Feedback for a line that is neither a number nor a command name.
    pub fn render_invalid_input(&self, input: &str) -> Vec<Line> {
        let mut line = Line::new();
        line.push(Span::styled(
            format!("Invalid option ({input:?}). Try again."),
            warning_style(),
        ));
        vec![Line::new(), line]
    }
}

fn verb(command: Command) -> &'static str {
    match command {
        Command::Exit => "exit",
        Command::Play => "play",
        Command::Reserve => "reserve",
        Command::UseReserved => "use a reserved piece",
        Command::SwapFront => "swap",
        Command::SwapTriple => "swap three",
    }
}

fn push_pieces<'a>(line: &mut Line, pieces: impl Iterator<Item = &'a Piece>) {
    let mut any = false;
    for piece in pieces {
        line.push(piece_span(*piece));
        line.push(Span::plain(" "));
        any = true;
    }
    if !any {
        line.push(Span::styled(
            "(empty)",
            Style {
                dim: true,
                ..Style::PLAIN
            },
        ));
    }
}

fn piece_span(piece: Piece) -> Span {
    Span::styled(
        format!("[{piece}]"),
        Style {
            fg: Some(piece_color(piece.kind)),
            bold: true,
            dim: false,
        },
    )
}

fn warning_style() -> Style {
    Style {
        fg: Some(Rgb::new(240, 200, 80)),
        ..Style::PLAIN
    }
}

pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
    }
}
