//! TerminalRenderer: writes styled lines to a terminal (or any writer).
//!
//! Output is line-oriented (no alternate screen, no raw mode) so it interleaves
//! naturally with the menu prompt read from stdin.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::style::{Line, Rgb, TextStyle};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    color: bool,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write `lines`, each followed by a newline.
    pub fn draw(&mut self, lines: &[Line]) -> Result<()> {
        self.buf.clear();
        encode_lines_into(lines, self.color, &mut self.buf)?;
        self.flush_buf()
    }

    /// Write `text` without a trailing newline (used for the prompt).
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(text))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode `lines` into `out`.
///
/// With `color` off the output is the plain text of each line.
pub fn encode_lines_into(lines: &[Line], color: bool, out: &mut Vec<u8>) -> Result<()> {
    for line in lines {
        for span in &line.spans {
            if color && span.style != TextStyle::PLAIN {
                apply_style_into(out, span.style)?;
                out.queue(Print(&span.text))?;
                out.queue(SetAttribute(Attribute::Reset))?;
                out.queue(ResetColor)?;
            } else {
                out.queue(Print(&span.text))?;
            }
        }
        out.queue(Print("\n"))?;
    }
    Ok(())
}

/// Plain-text rendering of `lines`, one per row.
pub fn render_plain(lines: &[Line]) -> String {
    let mut s = String::new();
    for line in lines {
        s.push_str(&line.text());
        s.push('\n');
    }
    s
}

fn apply_style_into(out: &mut Vec<u8>, style: TextStyle) -> Result<()> {
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
