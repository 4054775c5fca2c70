//! TerminalRenderer: flushes styled lines to a writer.
//!
//! Lines are encoded into an internal byte buffer with crossterm commands and
//! written in one go, so a frame never interleaves with other output.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::style::{Line, Rgb, Style};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    color: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W, color: bool) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
            color,
        }
    }

    /// Draw lines, each terminated by a newline.
    pub fn draw(&mut self, lines: &[Line]) -> Result<()> {
        self.buf.clear();
        encode_lines_into(lines, self.color, &mut self.buf)?;
        self.flush_buf()
    }

    /// Draw a single line without a trailing newline (prompts).
    pub fn draw_inline(&mut self, line: &Line) -> Result<()> {
        self.buf.clear();
        encode_line_into(line, self.color, &mut self.buf)?;
        self.flush_buf()
    }

    /// Write raw text as-is, bypassing styling.
    pub fn write_raw(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode lines (newline-terminated) into `out`.
///
/// With `color == false` only the text is emitted.
pub fn encode_lines_into(lines: &[Line], color: bool, out: &mut Vec<u8>) -> Result<()> {
    for line in lines {
        encode_line_into(line, color, out)?;
        out.push(b'\n');
    }
    Ok(())
}

fn encode_line_into(line: &Line, color: bool, out: &mut Vec<u8>) -> Result<()> {
    for span in &line.spans {
        if !color || span.style.is_plain() {
            out.extend_from_slice(span.text.as_bytes());
            continue;
        }
        apply_style_into(out, span.style)?;
        out.queue(Print(span.text.as_str()))?;
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: Style) -> Result<()> {
    if let Some(fg) = style.fg {
        out.queue(SetForegroundColor(rgb_to_color(fg)))?;
    }
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Span;

    fn sample() -> Vec<Line> {
        let mut line = Line::plain("queue: ");
        line.push(Span::styled(
            "[T0]",
            Style {
                fg: Some(Rgb::new(200, 120, 220)),
                bold: true,
                dim: false,
            },
        ));
        vec![line, Line::plain("done")]
    }

    #[test]
    fn test_plain_encoding_has_no_escapes() {
        let mut out = Vec::new();
        encode_lines_into(&sample(), false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "queue: [T0]\ndone\n");
    }

    #[test]
    fn test_color_encoding_wraps_styled_spans() {
        let mut out = Vec::new();
        encode_lines_into(&sample(), true, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("queue: \u{1b}["));
        assert!(text.contains("[T0]"));
        assert!(text.contains("38;2;200;120;220"));
        assert!(text.ends_with("done\n"));
    }

    #[test]
    fn test_renderer_writes_to_inner() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new(), false);
        renderer.draw(&sample()).unwrap();
        renderer.draw_inline(&Line::plain("Choice: ")).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out, "queue: [T0]\ndone\nChoice: ");
    }
}
