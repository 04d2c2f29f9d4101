//! Streaming colorizer
//!
//! Drives the gradient over a character stream: one character in, the same
//! character out, preceded by whatever color escape its screen position
//! calls for. Characters belonging to escape sequences already present in
//! the input are relayed untouched, and the first character after such a
//! sequence is re-colored because many terminals reset the foreground as a
//! side effect of unrelated control sequences.

use std::io::{self, Write};

use unicode_width::UnicodeWidthChar;

use crate::escape::EscapeState;
use crate::flag::Flag;
use crate::phase::PhaseParams;

/// Output encoding for color selection sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// 8-bit codes from the flag's fallback cycle, de-duplicated
    Indexed,
    /// 24-bit RGB, one selection per visible character
    TrueColor,
}

/// Streaming state for one run.
///
/// Line numbering and the phase offset persist across input sources so the
/// gradient stays continuous when files are concatenated; column, the
/// de-duplication cache, and the escape automaton restart per source.
#[derive(Debug)]
pub struct Colorizer {
    flag: &'static Flag,
    mode: ColorMode,
    phase: PhaseParams,
    column: usize,
    line: usize,
    escape: EscapeState,
    /// Most recently emitted position in the fallback cycle; `None` forces
    /// the next visible character to re-emit its color
    last_index: Option<usize>,
}

impl Colorizer {
    pub fn new(flag: &'static Flag, mode: ColorMode, phase: PhaseParams) -> Self {
        Self {
            flag,
            mode,
            phase,
            column: 0,
            line: 0,
            escape: EscapeState::Outside,
            last_index: None,
        }
    }

    /// Process one character, writing the colored result to `out`
    pub fn feed<W: Write>(&mut self, c: char, out: &mut W) -> io::Result<()> {
        self.escape = self.escape.step(c);
        match self.escape {
            EscapeState::Inside => {},
            EscapeState::JustFinished => {
                // the sequence may have clobbered the foreground; make the
                // next visible character re-assert it
                self.last_index = None;
            },
            EscapeState::Outside => {
                if c == '\n' {
                    self.line += 1;
                    self.column = 0;
                } else {
                    self.column += c.width().unwrap_or(0);
                    self.emit_color(out)?;
                }
            },
        }

        let mut buf = [0u8; 4];
        out.write_all(c.encode_utf8(&mut buf).as_bytes())
    }

    /// Process a whole string through [`feed`](Self::feed)
    pub fn feed_str<W: Write>(&mut self, input: &str, out: &mut W) -> io::Result<()> {
        for c in input.chars() {
            self.feed(c, out)?;
        }
        Ok(())
    }

    /// Terminate the current source: reset the terminal color and re-arm
    /// the per-source state for the next one. Line numbering deliberately
    /// carries over.
    pub fn finish_source<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        out.write_all(b"\x1b[0m")?;
        self.column = 0;
        self.escape = EscapeState::Outside;
        self.last_index = None;
        Ok(())
    }

    /// Current line number (spans sources)
    pub fn line(&self) -> usize {
        self.line
    }

    fn emit_color<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.mode {
            ColorMode::TrueColor => {
                let theta = self.phase.angle(self.column, self.line);
                let rgb = self.flag.color_at(theta);
                write!(out, "\x1b[38;2;{};{};{}m", rgb.r, rgb.g, rgb.b)
            },
            ColorMode::Indexed => {
                let index =
                    self.phase
                        .cycle_index(self.column, self.line, self.flag.ansi_codes.len());
                if self.last_index != Some(index) {
                    self.last_index = Some(index);
                    write!(out, "\x1b[38;5;{}m", self.flag.ansi_codes[index])?;
                }
                Ok(())
            },
        }
    }
}
