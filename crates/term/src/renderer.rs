//! TerminalRenderer: paints a cell grid to a raw-mode terminal.
//!
//! Full-frame redraws only. The playfield is sheet-sized, so a diffing
//! pipeline would buy nothing here; encoding is split from flushing so
//! frames can be tested without a terminal.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};
use tetros_core::CellGrid;
use tetros_types::{CellLocation, CellValue};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(8 * 1024),
        }
    }

    /// Enter raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call even after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw the grid with a border and a status line underneath.
    pub fn draw<G: CellGrid>(&mut self, grid: &G, status: &str) -> Result<()> {
        self.buf.clear();
        encode_frame(grid, status, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode one full frame into `out` as queued terminal commands.
pub fn encode_frame<G: CellGrid>(grid: &G, status: &str, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let columns = grid.columns();

    encode_border(columns, out)?;
    for row in 0..grid.rows() {
        out.queue(Print("|"))?;
        for column in 0..columns {
            match grid.value_at(CellLocation::new(row, column)) {
                CellValue::Empty => {
                    out.queue(Print("  "))?;
                }
                CellValue::Filled(tag) => {
                    out.queue(SetForegroundColor(tag_color(tag)))?;
                    out.queue(Print("[]"))?;
                    out.queue(ResetColor)?;
                }
            }
        }
        out.queue(Print("|\r\n"))?;
    }
    encode_border(columns, out)?;

    out.queue(Print(status))?;
    out.queue(Print("\r\n"))?;
    Ok(())
}

fn encode_border(columns: i32, out: &mut Vec<u8>) -> Result<()> {
    out.queue(Print("+"))?;
    for _ in 0..columns * 2 {
        out.queue(Print("-"))?;
    }
    out.queue(Print("+\r\n"))?;
    Ok(())
}

/// Stable foreground color per piece type tag.
fn tag_color(tag: u8) -> Color {
    match tag {
        2 => Color::Green,
        3 => Color::Yellow,
        4 => Color::Red,
        5 => Color::Blue,
        6 => Color::Cyan,
        7 => Color::DarkBlue,
        8 => Color::Magenta,
        _ => Color::White,
    }
}
