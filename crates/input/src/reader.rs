//! Blocking line reader over any `BufRead`.
//!
//! Skips blank lines so a stray Enter does not count as a command.

use std::io::{self, BufRead};

use crate::map::{parse_line, LineInput, ParseError};

/// Next meaningful input from the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Code(i64),
    Invalid(ParseError),
    /// End of input; callers treat it as an exit request.
    Eof,
}

#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    buf: String,
    lines_read: u64,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: String::with_capacity(64),
            lines_read: 0,
        }
    }

    /// Number of lines consumed so far, blank ones included.
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    pub fn next_input(&mut self) -> io::Result<Input> {
        loop {
            self.buf.clear();
            if self.inner.read_line(&mut self.buf)? == 0 {
                return Ok(Input::Eof);
            }
            self.lines_read += 1;
            match parse_line(&self.buf) {
                Ok(LineInput::Blank) => continue,
                Ok(LineInput::Code(code)) => return Ok(Input::Code(code)),
                Err(err) => return Ok(Input::Invalid(err)),
            }
        }
    }
}
