//! Crossterm terminal presenter for host-side simulation.
//!
//! Renders a [`FrameBuffer`] into a terminal so the whole stack can be driven
//! without device hardware. Wraps a buffered stdout writer; cell updates are
//! queued and flushed once per frame.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::render::buffer::FrameBuffer;
use crate::render::surface::{Screen, ScreenError};
use crate::theme::Color;

/// Terminal output backend using crossterm.
///
/// The presenter does NOT automatically enter the alternate screen on
/// creation — call [`enter`](TerminalScreen::enter) explicitly.
pub struct TerminalScreen {
    writer: BufWriter<Stdout>,
}

impl TerminalScreen {
    /// Create a presenter wrapping stdout.
    pub fn new() -> Self {
        Self { writer: BufWriter::new(io::stdout()) }
    }

    /// Enter alternate screen, enable raw mode, hide the cursor.
    pub fn enter(&mut self) -> io::Result<()> {
        execute!(self.writer, EnterAlternateScreen, cursor::Hide)?;
        terminal::enable_raw_mode()?;
        Ok(())
    }

    /// Restore the terminal: show cursor, disable raw mode, leave alternate
    /// screen.
    pub fn leave(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.writer, cursor::Show, LeaveAlternateScreen)?;
        Ok(())
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TerminalScreen {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), ScreenError> {
        for y in 0..frame.height() {
            queue!(self.writer, cursor::MoveTo(0, y as u16))?;
            for x in 0..frame.width() {
                if let Some(cell) = frame.cell(x, y) {
                    queue!(
                        self.writer,
                        SetForegroundColor(term_color(cell.fg)),
                        SetBackgroundColor(term_color(cell.bg)),
                        Print(cell.ch),
                    )?;
                }
            }
        }
        queue!(self.writer, ResetColor)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb { r: color.r, g: color.g, b: color.b }
}

// ===========================================================================
// Tests
// ===========================================================================
