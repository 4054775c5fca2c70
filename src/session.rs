//! Interaction loop: read a command, dispatch it, report the outcome.
//!
//! The session is generic over its input and output so it can be driven from
//! stdin/stdout or from in-memory buffers in tests.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::core::{GameState, Stats};
use crate::input::{Input, LineReader, ParseError};
use crate::observe::{self, ObservedOutcome};
use crate::term::{StateView, TerminalRenderer};
use crate::types::Outcome;

/// How results are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Menu-driven text with optional colour.
    #[default]
    Text,
    /// One JSON observation per line.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Inputs handled, including invalid ones and the final exit.
    pub commands: u64,
    pub stats: Stats,
    /// True when input ran out before an explicit exit.
    pub ended_by_eof: bool,
}

pub struct Session<R, W: Write> {
    state: GameState,
    reader: LineReader<R>,
    renderer: TerminalRenderer<W>,
    view: StateView,
    mode: OutputMode,
    seq: u64,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(state: GameState, input: R, renderer: TerminalRenderer<W>, mode: OutputMode) -> Self {
        Self {
            state,
            reader: LineReader::new(input),
            renderer,
            view: StateView::default(),
            mode,
            seq: 0,
        }
    }

    pub fn with_view(mut self, view: StateView) -> Self {
        self.view = view;
        self
    }

    pub fn into_output(self) -> W {
        self.renderer.into_inner()
    }

    /// Run until an exit command or end of input.
    pub fn run(&mut self) -> Result<SessionSummary> {
        self.state.start();
        if self.mode == OutputMode::Json {
            self.emit_observation(None, None)?;
        }

        let mut commands = 0u64;
        loop {
            if self.mode == OutputMode::Text {
                self.renderer
                    .draw(&self.view.render_state(&self.state.snapshot()))?;
                self.renderer.draw(&self.view.render_menu())?;
                self.renderer.draw_inline(&self.view.render_prompt())?;
            }

            let input = self.reader.next_input()?;
            commands += 1;
            match input {
                Input::Code(code) => {
                    let outcome = self.state.dispatch(code);
                    self.report(Some(code), &outcome)?;
                    if outcome.is_exit() {
                        return Ok(self.summary(commands, false));
                    }
                }
                Input::Invalid(ParseError::Unrecognized(text)) => {
                    self.state.record_invalid_input(&text);
                    match self.mode {
                        OutputMode::Text => {
                            self.renderer.draw(&self.view.render_invalid_input(&text))?
                        }
                        OutputMode::Json => self
                            .emit_observation(None, Some(ObservedOutcome::invalid_input(&text)))?,
                    }
                }
                Input::Eof => {
                    tracing::info!(lines = self.reader.lines_read(), "input closed");
                    if self.mode == OutputMode::Text {
                        // Keep the farewell off the prompt line.
                        self.renderer.write_raw("\n")?;
                    }
                    self.report(None, &Outcome::Exit)?;
                    return Ok(self.summary(commands, true));
                }
            }
        }
    }

    fn report(&mut self, code: Option<i64>, outcome: &Outcome) -> Result<()> {
        match self.mode {
            OutputMode::Text => self.renderer.draw(&self.view.render_outcome(outcome)),
            OutputMode::Json => self.emit_observation(code, Some(ObservedOutcome::from(outcome))),
        }
    }

    fn emit_observation(&mut self, code: Option<i64>, outcome: Option<ObservedOutcome>) -> Result<()> {
        let snap = self.state.snapshot();
        let line = observe::to_json_line(self.seq, code, outcome, &snap)?;
        self.seq += 1;
        self.renderer.write_raw(&line)
    }

    fn summary(&self, commands: u64, ended_by_eof: bool) -> SessionSummary {
        SessionSummary {
            commands,
            stats: self.state.stats(),
            ended_by_eof,
        }
    }
}
